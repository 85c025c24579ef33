//! Definitions for the per-lookup and per-run result types.
//!
//! The upstream service encodes "no sunrise at this coordinate" as a
//! day length of exactly 0 inside an otherwise successful response.
//! [`LookupOutcome`] lifts that sentinel into its own variant so the
//! dispatcher never compares magic numbers.

use thiserror::Error;

use crate::types::sunrise::SunriseReport;

/// A failure terminal for one unit of work only: it is logged, counted
/// toward completion, and never aborts the run. No retries.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network-level failure reaching the service, or a response body
    /// reqwest could not read or decode.
    #[error("error while making the api call: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but with a status other than `OK`.
    #[error("api call unsuccessful, response status: {0}")]
    ApiStatus(String),

    /// The `results` object of an `OK` response did not match the
    /// documented shape.
    #[error("malformed results in api response: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The resolution of a single lookup against the sunrise service.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The service reported a real sunrise; candidate for the best
    /// record.
    Success(SunriseReport),
    /// Valid response, but the sun never rises there today (polar
    /// night). Not a failure, yet contributes no candidate.
    NoSunrise,
    /// Transport, status, or payload error. See [`LookupError`].
    Failure(LookupError),
}

/// The single answer a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalResult {
    /// Day length in seconds at the coordinate with the earliest
    /// sunrise among all successful lookups.
    EarliestDayLength(u32),
    /// Every lookup failed or hit a no-sunrise coordinate, or there
    /// was no work at all.
    NoResult,
}
