//! Earliest-Sunrise Lookup Library.
//! Generates random coordinates and races bounded-concurrency lookups
//! against a sunrise/sunset service to find the location whose sun
//! rises first.

#[macro_use]
extern crate log;

pub mod types {
    pub mod coordinate;
    pub mod outcome;
    pub mod sunrise;
}

pub mod algorithms {
    pub mod dispatcher;
}

pub mod utils {
    pub mod generator;
    pub mod sunrise_api;
}

pub use algorithms::dispatcher;
pub use types::coordinate::Coordinate;
pub use types::outcome::{FinalResult, LookupError, LookupOutcome};
pub use types::sunrise::SunriseReport;
pub use utils::generator;
pub use utils::sunrise_api::SunriseClient;
