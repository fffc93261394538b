/// WhatsApp alert message formatting.
///
/// The strings here are the user-facing contract; tests pin them exactly
/// so any copy change is deliberate.

use crate::model::RankedRainEntry;

/// Header for the rain variant. Keeps its own trailing newline so the
/// hour lines join directly underneath.
pub const RAIN_ALERT_HEADER: &str =
    "🌧️ Rain alert! Rain is expected at the following times between 9 AM to 9 PM BDT:\n";

/// Sent when no qualifying rain hours were found.
pub const NO_RAIN_MESSAGE: &str =
    "🌞 No rain expected between 9 AM to 9 PM BDT. Enjoy your day!";

/// Formats the outgoing message body.
///
/// With entries: the alert header followed by one line per hour, in the
/// order given (already chronological from selection). Without entries:
/// the fixed no-rain message.
pub fn format_alert_message(entries: &[RankedRainEntry]) -> String {
    if entries.is_empty() {
        return NO_RAIN_MESSAGE.to_string();
    }

    let lines: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    format!("{}{}", RAIN_ALERT_HEADER, lines.join("\n"))
}
