//! Binary entry point: generates random coordinates and prints the
//! day length at the one with the earliest sunrise.

use env_logger::Env;
use log::info;

use sunscout::{dispatcher, generator, FinalResult, SunriseClient};

/// Coordinates generated for one run.
const COORDINATE_COUNT: usize = 10;
/// Upper bound on simultaneously in-flight API requests.
const MAX_SIMULTANEOUS_REQUESTS: usize = 2;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let coordinates = generator::generate(COORDINATE_COUNT);
    let client = SunriseClient::new();
    let lookup = |coordinate| {
        let client = client.clone();
        async move { client.lookup(coordinate).await }
    };

    match dispatcher::run(coordinates, lookup, MAX_SIMULTANEOUS_REQUESTS).await {
        FinalResult::EarliestDayLength(seconds) => {
            info!("day length of earliest sunrise: {}", seconds);
        }
        FinalResult::NoResult => {
            info!("All fetches have failed or there is no sunrise!");
        }
    }
}
