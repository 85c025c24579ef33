//! Struct definitions and implementations for [`Coordinate`].

/// Southernmost valid latitude.
pub const MIN_LATITUDE: f64 = -90.0;
/// Northernmost valid latitude.
pub const MAX_LATITUDE: f64 = 90.0;
/// Westernmost valid longitude.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Easternmost valid longitude.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A [`Coordinate`] is a geographic point handed to exactly one lookup
/// attempt per run.
///
/// Float values are kept at a 3-decimal precision (0.001), which is
/// roughly a 100-meter error margin -- plenty for a sunrise query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate with both components rounded to 3 decimal
    /// places, half away from zero.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round_to_thousandths(latitude),
            longitude: round_to_thousandths(longitude),
        }
    }
}

/// Rounds at the 1000ths scale. `f64::round` is half-away-from-zero,
/// which matches how the coordinates are displayed.
fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
