/// Test fixtures: representative JSON payloads from the Tomorrow.io
/// timelines API.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parser. They reflect the real envelope returned
/// by:
///   https://api.tomorrow.io/v4/timelines?timesteps=1h&...
///
/// Timelines response shape:
///   response.data.timelines[]
///     .timestep                 — "1h" for this service
///     .startTime / .endTime     — covered range
///     .intervals[]
///       .startTime              — ISO 8601 UTC, literal Z suffix
///       .values.precipitationIntensity — mm/h (only requested fields
///                                 appear; may be absent entirely)
///
/// Error bodies (bad API key, quota exhausted) replace `data` with
/// code/type/message fields. Parsers must handle that shape too.

/// Full forecast day for Dhaka (2024-06-12 local, UTC+6). Eleven hourly
/// intervals chosen to exercise every selection rule at once:
/// - 21:00Z (prev. day) and 02:00Z land before the 9 AM window open;
/// - 03:00Z and 09:00Z are in-window but dry (0.0);
/// - 04:00Z-07:00Z are the wet daytime hours (10 AM-1 PM local);
/// - 14:00Z (8 PM local) is wet but low intensity;
/// - 15:00Z (9 PM local) is the heaviest rain of the day, just past the
///   exclusive window end;
/// - 18:00Z rolls past local midnight onto 2024-06-13.
#[cfg(test)]
pub(crate) fn fixture_dhaka_timelines_json() -> &'static str {
    r#"{
      "data": {
        "timelines": [
          {
            "timestep": "1h",
            "startTime": "2024-06-11T21:00:00Z",
            "endTime": "2024-06-12T18:00:00Z",
            "intervals": [
              { "startTime": "2024-06-11T21:00:00Z", "values": { "precipitationIntensity": 0.8 } },
              { "startTime": "2024-06-12T02:00:00Z", "values": { "precipitationIntensity": 1.2 } },
              { "startTime": "2024-06-12T03:00:00Z", "values": { "precipitationIntensity": 0 } },
              { "startTime": "2024-06-12T04:00:00Z", "values": { "precipitationIntensity": 2.0 } },
              { "startTime": "2024-06-12T05:00:00Z", "values": { "precipitationIntensity": 5.0 } },
              { "startTime": "2024-06-12T06:00:00Z", "values": { "precipitationIntensity": 1.0 } },
              { "startTime": "2024-06-12T07:00:00Z", "values": { "precipitationIntensity": 4.0 } },
              { "startTime": "2024-06-12T09:00:00Z", "values": { "precipitationIntensity": 0 } },
              { "startTime": "2024-06-12T14:00:00Z", "values": { "precipitationIntensity": 0.6 } },
              { "startTime": "2024-06-12T15:00:00Z", "values": { "precipitationIntensity": 6.5 } },
              { "startTime": "2024-06-12T18:00:00Z", "values": { "precipitationIntensity": 7.0 } }
            ]
          }
        ]
      }
    }"#
}

/// Intervals with the precipitation field absent: one normal interval,
/// one with an empty values object, one carrying only a field we did not
/// request. The parser must default missing intensity to 0.0 rather than
/// dropping the interval or failing.
#[cfg(test)]
pub(crate) fn fixture_sparse_fields_json() -> &'static str {
    r#"{
      "data": {
        "timelines": [
          {
            "timestep": "1h",
            "startTime": "2024-06-12T04:00:00Z",
            "endTime": "2024-06-12T06:00:00Z",
            "intervals": [
              { "startTime": "2024-06-12T04:00:00Z", "values": { "precipitationIntensity": 2.5 } },
              { "startTime": "2024-06-12T05:00:00Z", "values": {} },
              { "startTime": "2024-06-12T06:00:00Z", "values": { "temperature": 31.4 } }
            ]
          }
        ]
      }
    }"#
}

/// A fully dry forecast day: every interval present, every intensity 0.
/// Parses cleanly; selection yields nothing and the service sends the
/// no-rain message.
#[cfg(test)]
pub(crate) fn fixture_all_dry_json() -> &'static str {
    r#"{
      "data": {
        "timelines": [
          {
            "timestep": "1h",
            "startTime": "2024-06-12T03:00:00Z",
            "endTime": "2024-06-12T09:00:00Z",
            "intervals": [
              { "startTime": "2024-06-12T03:00:00Z", "values": { "precipitationIntensity": 0 } },
              { "startTime": "2024-06-12T05:00:00Z", "values": { "precipitationIntensity": 0 } },
              { "startTime": "2024-06-12T07:00:00Z", "values": { "precipitationIntensity": 0 } },
              { "startTime": "2024-06-12T09:00:00Z", "values": { "precipitationIntensity": 0 } }
            ]
          }
        ]
      }
    }"#
}

/// Tomorrow.io auth failure body. No `data` key at all; code/type/message
/// instead. Parser must report MissingData so the run can still produce
/// a no-rain alert instead of crashing.
#[cfg(test)]
pub(crate) fn fixture_auth_error_json() -> &'static str {
    r#"{
      "code": 401002,
      "type": "Invalid Auth",
      "message": "The method requires authentication but it was not presented or was wholly invalid."
    }"#
}

/// Two timelines in one response, the shape a `timesteps=1h,1d` style
/// request returns: a daily aggregate first, then the hourly intervals.
/// The daytime rain lives entirely in the second timeline, so a parser
/// that stops after the first would report a dry day.
#[cfg(test)]
pub(crate) fn fixture_multi_timeline_json() -> &'static str {
    r#"{
      "data": {
        "timelines": [
          {
            "timestep": "1d",
            "startTime": "2024-06-11T18:00:00Z",
            "endTime": "2024-06-12T18:00:00Z",
            "intervals": [
              { "startTime": "2024-06-11T18:00:00Z", "values": { "precipitationIntensity": 0 } }
            ]
          },
          {
            "timestep": "1h",
            "startTime": "2024-06-12T04:00:00Z",
            "endTime": "2024-06-12T05:00:00Z",
            "intervals": [
              { "startTime": "2024-06-12T04:00:00Z", "values": { "precipitationIntensity": 5.0 } },
              { "startTime": "2024-06-12T05:00:00Z", "values": { "precipitationIntensity": 1.5 } }
            ]
          }
        ]
      }
    }"#
}

/// Structurally valid envelope with an empty timelines array.
#[cfg(test)]
pub(crate) fn fixture_empty_timelines_json() -> &'static str {
    r#"{ "data": { "timelines": [] } }"#
}

/// One timeline with no intervals — a valid but empty forecast, distinct
/// from the missing-data cases above.
#[cfg(test)]
pub(crate) fn fixture_empty_intervals_json() -> &'static str {
    r#"{
      "data": {
        "timelines": [
          {
            "timestep": "1h",
            "startTime": "2024-06-12T03:00:00Z",
            "endTime": "2024-06-12T03:00:00Z",
            "intervals": []
          }
        ]
      }
    }"#
}
