/// Daytime rain-hour selection.
///
/// Pure functions over already-parsed forecast data: ingest hands us
/// hourly `ForecastPoint`s in site local time, and this module picks the
/// hours worth alerting on. No I/O here, so the ranking rules are
/// testable without network access.

use crate::model::{ForecastPoint, RainWindowConfig, RankedRainEntry};
use chrono::{NaiveDate, Timelike};

/// Selects the rainiest hours of `today` inside the configured daytime
/// window, returned in chronological order.
///
/// Selection rules:
/// 1. Keep only points whose local calendar date equals `today`.
/// 2. Keep only local hours in `[window_start_hour, window_end_hour)`.
/// 3. Keep only intensities strictly above zero.
/// 4. Rank by intensity descending, ties broken by earlier timestamp,
///    and truncate to `top_n`.
/// 5. Re-sort the survivors by timestamp for presentation.
///
/// Points failing a filter are discarded, not an error; an empty result
/// means a dry day and the caller renders the no-rain message. `today`
/// is passed in rather than computed here so tests control the clock.
pub fn select_top_rain_hours(
    points: &[ForecastPoint],
    today: NaiveDate,
    config: &RainWindowConfig,
) -> Vec<RankedRainEntry> {
    let mut candidates: Vec<&ForecastPoint> = points
        .iter()
        .filter(|p| p.timestamp.date_naive() == today)
        .filter(|p| {
            let hour = p.timestamp.hour();
            hour >= config.window_start_hour && hour < config.window_end_hour
        })
        .filter(|p| p.precipitation_intensity > 0.0)
        .collect();

    // Ranking sort: intensity decides, timestamp only breaks exact ties.
    candidates.sort_by(|a, b| {
        b.precipitation_intensity
            .total_cmp(&a.precipitation_intensity)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });
    candidates.truncate(config.top_n);

    // Presentation sort: the alert reads chronologically regardless of rank.
    candidates.sort_by_key(|p| p.timestamp);

    candidates
        .into_iter()
        .map(|p| RankedRainEntry::new(p.timestamp, p.precipitation_intensity))
        .collect()
}
