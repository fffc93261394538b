/// Tomorrow.io timelines API client.
///
/// Handles URL construction, the blocking fetch, and JSON response
/// parsing for the v4 timelines endpoint:
///   https://api.tomorrow.io/v4/timelines
///
/// See `fixtures.rs` for annotated examples of the response structure.

use crate::model::{ForecastError, ForecastPoint};
use crate::site::Site;
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde structures for timelines JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct TimelinesResponse {
    // Error bodies (bad API key, quota exceeded) have no `data` key.
    data: Option<TimelinesData>,
}

#[derive(Deserialize)]
struct TimelinesData {
    timelines: Vec<Timeline>,
}

#[derive(Deserialize)]
struct Timeline {
    intervals: Vec<Interval>,
}

#[derive(Deserialize)]
struct Interval {
    #[serde(rename = "startTime")]
    start_time: String,
    values: IntervalValues,
}

#[derive(Deserialize)]
struct IntervalValues {
    #[serde(rename = "precipitationIntensity")]
    precipitation_intensity: Option<f64>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

const TIMELINES_BASE_URL: &str = "https://api.tomorrow.io/v4/timelines";

/// Interval timestamps come back as ISO 8601 UTC with a literal Z suffix.
const INTERVAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Builds a timelines API URL requesting hourly precipitation intensity
/// in metric units (mm/h) for the given site.
pub fn build_timelines_url(site: &Site, api_key: &str) -> String {
    let location = site.location_param();
    let fields = "precipitationIntensity";
    let units = "metric";
    let timesteps = "1h";

    format!(
        "{}?location={}&fields={}&apikey={}&units={}&timesteps={}",
        TIMELINES_BASE_URL,
        location,
        fields,
        api_key,
        units,
        timesteps
    )
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Performs the blocking GET and returns the raw response body.
///
/// The body is returned unparsed so the caller can log it for
/// diagnostics before handing it to `parse_timelines_response`.
///
/// # Errors
/// - `ForecastError::Network` — transport failure or non-success status.
pub fn fetch_timelines(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<String, ForecastError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| ForecastError::Network(format!("request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(ForecastError::Network(format!(
            "Tomorrow.io API error: {}",
            response.status()
        )));
    }

    response
        .text()
        .map_err(|e| ForecastError::Network(format!("reading body failed: {}", e)))
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a timelines API JSON response into `ForecastPoint`s, converting
/// each interval's UTC timestamp to the given timezone.
///
/// Intervals are collected from every timeline in the response, in
/// order. A plain `timesteps=1h` request returns a single timeline, but
/// the API carries one per requested timestep. Intervals that omit
/// `precipitationIntensity` become points with intensity 0.0 so the
/// selector filters them like any dry hour.
///
/// # Errors
/// - `ForecastError::ParseError` — malformed JSON or an interval
///   timestamp that does not match `YYYY-MM-DDTHH:MM:SSZ`.
/// - `ForecastError::MissingData` — no `data` key (error body) or an
///   empty `timelines` array. An empty `intervals` array is NOT an
///   error; it parses to an empty point list.
pub fn parse_timelines_response(json: &str, tz: Tz) -> Result<Vec<ForecastPoint>, ForecastError> {
    let response: TimelinesResponse = serde_json::from_str(json)
        .map_err(|e| ForecastError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    let data = response.data.ok_or_else(|| {
        ForecastError::MissingData("response has no 'data' key".to_string())
    })?;

    if data.timelines.is_empty() {
        return Err(ForecastError::MissingData("no timelines in response".to_string()));
    }

    let mut points = Vec::new();

    for timeline in &data.timelines {
        for interval in &timeline.intervals {
            let naive = NaiveDateTime::parse_from_str(&interval.start_time, INTERVAL_TIME_FORMAT)
                .map_err(|e| {
                    ForecastError::ParseError(format!(
                        "bad interval timestamp '{}': {}",
                        interval.start_time, e
                    ))
                })?;

            let timestamp = naive.and_utc().with_timezone(&tz);
            let precipitation_intensity = interval.values.precipitation_intensity.unwrap_or(0.0);

            points.push(ForecastPoint {
                timestamp,
                precipitation_intensity,
            });
        }
    }

    Ok(points)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
