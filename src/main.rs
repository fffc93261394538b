//! Rain Alert Service - Daily Run
//!
//! A one-shot pipeline that:
//! 1. Loads API credentials from the environment
//! 2. Fetches today's hourly precipitation forecast from Tomorrow.io
//! 3. Selects the rainiest hours between 9 AM and 9 PM Dhaka time
//! 4. Sends the summary to a fixed recipient over WhatsApp via Twilio
//!
//! Intended to run from cron once each morning. The process exits
//! non-zero on any failure so the scheduler can flag a missed alert.
//!
//! Environment:
//!   TOMORROW_API_KEY   - Tomorrow.io weather API key
//!   TWILIO_ACCOUNT_SID - Twilio account SID
//!   TWILIO_AUTH_TOKEN  - Twilio auth token

use rainmon_service::alert::message::format_alert_message;
use rainmon_service::analysis::rain_window::select_top_rain_hours;
use rainmon_service::config;
use rainmon_service::ingest::tomorrow;
use rainmon_service::model::{ForecastError, RainWindowConfig};
use rainmon_service::notify::twilio;
use rainmon_service::site::DHAKA_UNIVERSITY;

fn main() {
    println!("🌧️ Dhaka Rain Alert Service");
    println!("============================\n");

    if let Err(e) = run() {
        eprintln!("\n❌ Rain alert run failed: {}\n", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let site = &DHAKA_UNIVERSITY;
    let window = RainWindowConfig::default();

    println!("🔑 Loading credentials...");
    let credentials = config::load_credentials()?;

    // One clock reading anchors the whole run, even across local midnight.
    let now = site.local_now();
    let today = now.date_naive();
    println!("🕐 Local time at {}: {}", site.name, now.format("%Y-%m-%d %I:%M %p"));

    // One HTTP client serves both API calls.
    let client = reqwest::blocking::Client::new();

    println!("📡 Fetching hourly forecast for {} ({})...", site.name, site.location_param());
    let url = tomorrow::build_timelines_url(site, &credentials.tomorrow_api_key);
    let body = tomorrow::fetch_timelines(&client, &url)?;
    // Raw body goes to stderr where cron captures it for debugging.
    eprintln!("Raw forecast response: {}", body);

    let points = match tomorrow::parse_timelines_response(&body, site.timezone) {
        Ok(points) => {
            println!("   ✓ {} hourly intervals received", points.len());
            points
        }
        Err(ForecastError::MissingData(msg)) => {
            // An empty upstream answer is not a malformed one: log the
            // distinction and fall through to the no-rain alert.
            eprintln!("⚠️  Forecast carried no data ({}); treating as a dry day", msg);
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "\n🔎 Selecting rain hours for {} ({}:00-{}:00 local)...",
        today, window.window_start_hour, window.window_end_hour
    );
    let entries = select_top_rain_hours(&points, today, &window);
    if entries.is_empty() {
        println!("   No qualifying rain hours");
    } else {
        for entry in &entries {
            println!("   {}", entry.label);
        }
    }

    let message = format_alert_message(&entries);

    println!("\n📨 Sending WhatsApp alert via Twilio...");
    let sid = twilio::send_whatsapp_alert(&client, &credentials, &message)?;
    println!("   ✓ Message sent to {}: {}", twilio::RECIPIENT_WHATSAPP, sid);

    Ok(())
}
