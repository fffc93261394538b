/// Forecast analysis for the rain alert service.
///
/// Submodules:
/// - `rain_window` — picks the top rain hours of the day inside the
///   daytime alert window.

pub mod rain_window;
