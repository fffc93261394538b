/// Upstream data ingest.
///
/// Submodules:
/// - `tomorrow` — Tomorrow.io timelines API: URL construction, fetch,
///   and JSON parsing into `ForecastPoint`s.
/// - `fixtures` (test only) — representative API response payloads.

pub mod tomorrow;

pub mod fixtures;
