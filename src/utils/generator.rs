//! Helper functions for generating random coordinates.

use rand::Rng;

use crate::types::coordinate::{
    Coordinate, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};

/// Draws `n` random coordinates, uniformly over the whole globe.
///
/// Each latitude and longitude is drawn independently over its full
/// valid range and rounded to 3 decimal places. A new call is a new
/// independent draw; nothing is cached or reused.
///
/// # Arguments
/// * `n` - The amount of coordinates to generate. May be 0.
///
/// # Returns
/// A vector of exactly `n` coordinates.
pub fn generate(n: usize) -> Vec<Coordinate> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            Coordinate::new(
                rng.gen_range(MIN_LATITUDE..=MAX_LATITUDE),
                rng.gen_range(MIN_LONGITUDE..=MAX_LONGITUDE),
            )
        })
        .collect()
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
