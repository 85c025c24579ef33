//! The core of the lookup orchestration.
//!
//! The dispatcher drains a coordinate list with a bounded number of
//! concurrently in-flight lookups, folds every resolution into a
//! running earliest-sunrise accumulator, and finalizes exactly once
//! when the last outstanding lookup resolves.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::types::coordinate::Coordinate;
use crate::types::outcome::{FinalResult, LookupOutcome};
use crate::types::sunrise::SunriseReport;

/// Bookkeeping for one run. Owned by the dispatcher task alone: every
/// resolution is folded to completion before the next one is polled,
/// so no lock is needed. A port that resolves lookups on parallel OS
/// threads would have to put this state behind a mutex or feed a
/// single collector task through a channel.
struct RunState {
    /// Coordinates not yet handed to a slot. Drained back to front.
    pending: Vec<Coordinate>,
    /// Resolved lookups of any kind: success, no-sunrise, or failure.
    completed: usize,
    /// The success with the earliest sunrise seen so far.
    best: Option<SunriseReport>,
}

/// Runs all lookups for the given coordinates and reports the day
/// length at the location with the earliest sunrise.
///
/// Up to `max_concurrency` lookups are outstanding at once. Each slot
/// that resolves immediately takes over the next pending coordinate;
/// a slot that finds no pending work simply retires. Failures and
/// no-sunrise resolutions are logged, counted toward completion, and
/// never abort the run.
///
/// # Arguments
/// * `coordinates` - The work list; each entry is looked up exactly
///   once.
/// * `lookup` - The lookup collaborator, one network call per
///   invocation.
/// * `max_concurrency` - Upper bound on simultaneously in-flight
///   lookups. Values below 1 are treated as 1.
///
/// # Returns
/// [`FinalResult::EarliestDayLength`] if at least one lookup succeeded
/// with a real sunrise, [`FinalResult::NoResult`] otherwise (including
/// an empty work list).
pub async fn run<L, Fut>(
    coordinates: Vec<Coordinate>,
    lookup: L,
    max_concurrency: usize,
) -> FinalResult
where
    L: Fn(Coordinate) -> Fut,
    Fut: Future<Output = LookupOutcome>,
{
    let total = coordinates.len();
    if total == 0 {
        info!("No coordinates to look up");
        return FinalResult::NoResult;
    }

    let mut state = RunState {
        pending: coordinates,
        completed: 0,
        best: None,
    };

    info!(
        "Dispatching {} lookups, at most {} in flight",
        total, max_concurrency
    );
    let mut in_flight = FuturesUnordered::new();
    for _ in 0..max_concurrency.max(1).min(total) {
        if let Some(coordinate) = state.pending.pop() {
            in_flight.push(attempt(&lookup, coordinate));
        }
    }

    while let Some((coordinate, outcome)) = in_flight.next().await {
        fold_outcome(&mut state, coordinate, outcome);
        state.completed += 1;
        debug!("Lookups resolved: {}/{}", state.completed, total);
        if let Some(coordinate) = state.pending.pop() {
            in_flight.push(attempt(&lookup, coordinate));
        }
    }

    // The in-flight stream is only exhausted once every coordinate is
    // accounted for, so this is the single finalization point.
    debug_assert_eq!(state.completed, total);
    match state.best {
        Some(best) => FinalResult::EarliestDayLength(best.day_length_seconds),
        None => FinalResult::NoResult,
    }
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

/// Runs one lookup, keeping the coordinate attached to its resolution.
async fn attempt<L, Fut>(lookup: &L, coordinate: Coordinate) -> (Coordinate, LookupOutcome)
where
    L: Fn(Coordinate) -> Fut,
    Fut: Future<Output = LookupOutcome>,
{
    (coordinate, lookup(coordinate).await)
}

/// Folds a single resolution into the run state. A strictly earlier
/// sunrise replaces the best record; an equal timestamp keeps the
/// first-seen record.
fn fold_outcome(state: &mut RunState, coordinate: Coordinate, outcome: LookupOutcome) {
    match outcome {
        LookupOutcome::Success(report) => {
            let earlier = state
                .best
                .as_ref()
                .map_or(true, |best| report.sunrise < best.sunrise);
            if earlier {
                debug!(
                    "New earliest sunrise {} at [lat={} lon={}]",
                    report.sunrise, coordinate.latitude, coordinate.longitude
                );
                state.best = Some(report);
            }
        }
        LookupOutcome::NoSunrise => {
            info!(
                "Seems like the coordinates [lat={} lon={}] are too close to the pole, there may not be any sunrise there!",
                coordinate.latitude, coordinate.longitude
            );
        }
        LookupOutcome::Failure(error) => {
            error!(
                "Lookup for [lat={} lon={}] failed: {}",
                coordinate.latitude, coordinate.longitude, error
            );
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
