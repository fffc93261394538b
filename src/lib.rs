/// rainmon_service: daily rain alert for Dhaka over WhatsApp.
///
/// # Module structure
///
/// ```text
/// rainmon_service
/// ├── model       — shared data types (ForecastPoint, RankedRainEntry, ForecastError, …)
/// ├── config      — API credentials from the environment (.env supported)
/// ├── site        — monitored location registry (Dhaka University campus)
/// ├── ingest
/// │   ├── tomorrow — Tomorrow.io timelines API: URL construction, fetch, JSON parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── analysis
/// │   └── rain_window — top rain hours of the day inside the 9 AM-9 PM window
/// ├── alert
/// │   └── message  — WhatsApp message text (rain listing or no-rain variant)
/// └── notify
///     └── twilio   — delivery through the Twilio Messages REST API
/// ```

/// Public modules
pub mod alert;
pub mod analysis;
pub mod config;
pub mod ingest;
pub mod model;
pub mod notify;
pub mod site;
