/// Monitored site registry.
///
/// One site today (the Dhaka University campus); keeping coordinates and
/// timezone in a registry entry means additional sites can be added
/// without touching the pipeline stages.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

// ---------------------------------------------------------------------------
// Site registry
// ---------------------------------------------------------------------------

/// A location we fetch precipitation forecasts for.
#[derive(Debug)]
pub struct Site {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Civil timezone used for "today" and the daytime alert window.
    pub timezone: Tz,
}

/// Dhaka University campus, Bangladesh.
pub static DHAKA_UNIVERSITY: Site = Site {
    name: "Dhaka University",
    latitude: 23.726658238586133,
    longitude: 90.39265872628926,
    timezone: chrono_tz::Asia::Dhaka,
};

impl Site {
    /// `location` query parameter value for the Tomorrow.io API
    /// ("lat,lon" with full float precision).
    pub fn location_param(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Current local time at the site. Callers derive "today" from this
    /// one reading so a run straddling midnight stays self-consistent.
    pub fn local_now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
