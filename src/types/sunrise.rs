//! Struct definitions and implementations for [`SunriseReport`].

use chrono::{DateTime, Utc};

/// Everything the sunrise/sunset service reports for one coordinate on
/// one day. All instants are absolute (UTC).
///
/// Only `sunrise` and `day_length_seconds` drive the dispatcher's
/// decision; the solar-noon and twilight fields are carried because
/// they are part of the service contract.
#[derive(Debug, Clone, PartialEq)]
pub struct SunriseReport {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub solar_noon: DateTime<Utc>,
    /// The day length in seconds. Exactly 0 means the sun never rises
    /// at this coordinate today (polar night) -- see
    /// [`LookupOutcome::NoSunrise`](`super::outcome::LookupOutcome::NoSunrise`).
    pub day_length_seconds: u32,
    pub civil_twilight_begin: DateTime<Utc>,
    pub civil_twilight_end: DateTime<Utc>,
    pub nautical_twilight_begin: DateTime<Utc>,
    pub nautical_twilight_end: DateTime<Utc>,
    pub astronomical_twilight_begin: DateTime<Utc>,
    pub astronomical_twilight_end: DateTime<Utc>,
}
