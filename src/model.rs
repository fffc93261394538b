/// Shared data types for the rain alert pipeline.
///
/// `ForecastPoint` is the unit of ingest: one hourly forecast interval,
/// already converted to site local time. Everything downstream (window
/// filtering, ranking, message formatting) operates on these.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

// ---------------------------------------------------------------------------
// Forecast data
// ---------------------------------------------------------------------------

/// A single hourly forecast interval in site local time.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Tz>,
    /// Precipitation intensity in mm/h (metric units requested upstream).
    /// Intervals that omit the field parse as 0.0.
    pub precipitation_intensity: f64,
}

/// One selected rain hour, carrying the preformatted line that goes into
/// the alert message.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRainEntry {
    pub timestamp: DateTime<Tz>,
    pub precipitation_intensity: f64,
    /// e.g. "2024-06-12 10:00 AM with intensity 2.0 mm/h"
    pub label: String,
}

impl RankedRainEntry {
    /// Builds an entry with its alert line, 12-hour clock in local time.
    pub fn new(timestamp: DateTime<Tz>, precipitation_intensity: f64) -> Self {
        let label = format!(
            "{} with intensity {} mm/h",
            timestamp.format("%Y-%m-%d %I:%M %p"),
            display_intensity(precipitation_intensity)
        );
        RankedRainEntry {
            timestamp,
            precipitation_intensity,
            label,
        }
    }

    /// Local hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

/// Intensity rendered for message text. Whole numbers keep one decimal
/// place ("2.0 mm/h"), fractional values print as-is ("3.25 mm/h").
fn display_intensity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

// ---------------------------------------------------------------------------
// Alert window configuration
// ---------------------------------------------------------------------------

/// Daytime window and ranking parameters for rain hour selection.
///
/// Defaults match the alerting policy: 9 AM to 9 PM local, top three
/// rainiest hours.
#[derive(Debug, Clone, Copy)]
pub struct RainWindowConfig {
    /// Inclusive local start hour (0-23).
    pub window_start_hour: u32,
    /// Exclusive local end hour.
    pub window_end_hour: u32,
    /// Maximum number of hours listed in one alert.
    pub top_n: usize,
}

impl Default for RainWindowConfig {
    fn default() -> Self {
        RainWindowConfig {
            window_start_hour: 9,
            window_end_hour: 21,
            top_n: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Ingest errors
// ---------------------------------------------------------------------------

/// Errors from the forecast fetch-and-parse path.
///
/// `MissingData` is deliberately separate from `ParseError`: a response
/// without usable intervals still produces a (no-rain) alert, while a
/// malformed response aborts the run.
#[derive(Debug)]
pub enum ForecastError {
    /// HTTP transport failed or the API returned a non-success status.
    Network(String),
    /// Response body was not the JSON shape we expect.
    ParseError(String),
    /// Response parsed but carried no forecast data (e.g. no `data` key).
    MissingData(String),
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::Network(msg) => write!(f, "Forecast request failed: {}", msg),
            ForecastError::ParseError(msg) => write!(f, "Forecast response malformed: {}", msg),
            ForecastError::MissingData(msg) => write!(f, "Forecast response had no data: {}", msg),
        }
    }
}

impl std::error::Error for ForecastError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Dhaka;

    #[test]
    fn test_entry_label_morning_hour() {
        let ts = Dhaka.with_ymd_and_hms(2024, 6, 12, 10, 0, 0).unwrap();
        let entry = RankedRainEntry::new(ts, 2.0);
        assert_eq!(entry.label, "2024-06-12 10:00 AM with intensity 2.0 mm/h");
    }

    #[test]
    fn test_entry_label_uses_twelve_hour_clock() {
        let ts = Dhaka.with_ymd_and_hms(2024, 6, 12, 13, 0, 0).unwrap();
        let entry = RankedRainEntry::new(ts, 4.0);
        assert_eq!(
            entry.label, "2024-06-12 01:00 PM with intensity 4.0 mm/h",
            "13:00 must render as 01:00 PM"
        );
    }

    #[test]
    fn test_entry_label_noon_and_midnight() {
        let noon = RankedRainEntry::new(Dhaka.with_ymd_and_hms(2024, 6, 12, 12, 0, 0).unwrap(), 1.0);
        assert!(
            noon.label.starts_with("2024-06-12 12:00 PM"),
            "noon must be 12:00 PM, got: {}",
            noon.label
        );

        let midnight = RankedRainEntry::new(Dhaka.with_ymd_and_hms(2024, 6, 12, 0, 30, 0).unwrap(), 1.0);
        assert!(
            midnight.label.starts_with("2024-06-12 12:30 AM"),
            "after-midnight must be 12:xx AM, got: {}",
            midnight.label
        );
    }

    #[test]
    fn test_whole_number_intensity_keeps_decimal_place() {
        let ts = Dhaka.with_ymd_and_hms(2024, 6, 12, 11, 0, 0).unwrap();
        let entry = RankedRainEntry::new(ts, 5.0);
        assert!(
            entry.label.ends_with("with intensity 5.0 mm/h"),
            "5 mm/h must read as 5.0, got: {}",
            entry.label
        );
    }

    #[test]
    fn test_fractional_intensity_prints_as_is() {
        let ts = Dhaka.with_ymd_and_hms(2024, 6, 12, 11, 0, 0).unwrap();
        let entry = RankedRainEntry::new(ts, 3.25);
        assert!(
            entry.label.ends_with("with intensity 3.25 mm/h"),
            "fractional intensity must not be rounded, got: {}",
            entry.label
        );
    }

    #[test]
    fn test_default_window_config() {
        let config = RainWindowConfig::default();
        assert_eq!(config.window_start_hour, 9);
        assert_eq!(config.window_end_hour, 21);
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_forecast_error_display_distinguishes_kinds() {
        let missing = ForecastError::MissingData("no 'data' key".to_string());
        let parse = ForecastError::ParseError("bad timestamp".to_string());
        assert!(format!("{}", missing).contains("no data"));
        assert!(format!("{}", parse).contains("malformed"));
    }
}
