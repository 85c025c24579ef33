//! Thin client for the sunrise-sunset.org JSON API.
//!
//! One [`SunriseClient::lookup`] call owns exactly one network
//! request. Everything the dispatcher needs to know about a response
//! is folded into a [`LookupOutcome`]; retries and timeouts beyond the
//! per-request limit are deliberately not this module's business.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::coordinate::Coordinate;
use crate::types::outcome::{LookupError, LookupOutcome};
use crate::types::sunrise::SunriseReport;

/// Public endpoint of the sunrise/sunset service.
const API_URL: &str = "https://api.sunrise-sunset.org/json";
/// The dispatcher imposes no timeout of its own, so the request
/// carries one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const LATITUDE_PARAM: &str = "lat";
const LONGITUDE_PARAM: &str = "lng";
/// `formatted=0` asks for ISO-8601 timestamps instead of prose.
const FORMATTED_PARAM: (&str, &str) = ("formatted", "0");

const STATUS_OK: &str = "OK";

/// Lookup collaborator backed by the real HTTP service.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SunriseClient {
    http: reqwest::Client,
    base_url: String,
}

impl SunriseClient {
    /// Creates a client against the public sunrise-sunset.org API.
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    /// Creates a client against a custom endpoint. Used to point the
    /// client at a local mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Looks up sunrise data for one coordinate.
    ///
    /// # Returns
    /// * [`LookupOutcome::Success`] for an `OK` response with a real
    ///   sunrise.
    /// * [`LookupOutcome::NoSunrise`] for an `OK` response with a day
    ///   length of exactly 0.
    /// * [`LookupOutcome::Failure`] for any transport, status, or
    ///   payload error.
    pub async fn lookup(&self, coordinate: Coordinate) -> LookupOutcome {
        debug!(
            "Fetching sunrise data for [lat={} lon={}]",
            coordinate.latitude, coordinate.longitude
        );
        match self.fetch(coordinate).await {
            Ok(report) if report.day_length_seconds == 0 => LookupOutcome::NoSunrise,
            Ok(report) => LookupOutcome::Success(report),
            Err(error) => LookupOutcome::Failure(error),
        }
    }

    /// See [`SunriseClient::lookup`].
    async fn fetch(&self, coordinate: Coordinate) -> Result<SunriseReport, LookupError> {
        let response: ApiResponse = self
            .http
            .get(&self.base_url)
            .query(&[
                (LATITUDE_PARAM, coordinate.latitude.to_string()),
                (LONGITUDE_PARAM, coordinate.longitude.to_string()),
                (FORMATTED_PARAM.0, FORMATTED_PARAM.1.to_string()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .json()
            .await?;

        // On errors the service puts a bare string in `results`, so
        // the status has to be checked before decoding the payload.
        if response.status != STATUS_OK {
            return Err(LookupError::ApiStatus(response.status));
        }
        let dto: SunriseReportDto = serde_json::from_value(response.results)?;
        Ok(dto.into())
    }
}

impl Default for SunriseClient {
    fn default() -> Self {
        Self::new()
    }
}

//---------------------------------------------------------------
// Wire format
//---------------------------------------------------------------

/// Response envelope common to every status.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: serde_json::Value,
    status: String,
}

/// The `results` object of an `OK` response, field names as the
/// service spells them.
#[derive(Debug, Deserialize)]
struct SunriseReportDto {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    solar_noon: DateTime<Utc>,
    day_length: u32,
    civil_twilight_begin: DateTime<Utc>,
    civil_twilight_end: DateTime<Utc>,
    nautical_twilight_begin: DateTime<Utc>,
    nautical_twilight_end: DateTime<Utc>,
    astronomical_twilight_begin: DateTime<Utc>,
    astronomical_twilight_end: DateTime<Utc>,
}

impl From<SunriseReportDto> for SunriseReport {
    fn from(dto: SunriseReportDto) -> Self {
        Self {
            sunrise: dto.sunrise,
            sunset: dto.sunset,
            solar_noon: dto.solar_noon,
            day_length_seconds: dto.day_length,
            civil_twilight_begin: dto.civil_twilight_begin,
            civil_twilight_end: dto.civil_twilight_end,
            nautical_twilight_begin: dto.nautical_twilight_begin,
            nautical_twilight_end: dto.nautical_twilight_end,
            astronomical_twilight_begin: dto.astronomical_twilight_begin,
            astronomical_twilight_end: dto.astronomical_twilight_end,
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod sunrise_api_tests {
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn ok_body(day_length: u32) -> serde_json::Value {
        json!({
            "results": {
                "sunrise": "2015-05-21T05:05:35+00:00",
                "sunset": "2015-05-21T19:22:59+00:00",
                "solar_noon": "2015-05-21T12:14:17+00:00",
                "day_length": day_length,
                "civil_twilight_begin": "2015-05-21T04:36:17+00:00",
                "civil_twilight_end": "2015-05-21T19:52:17+00:00",
                "nautical_twilight_begin": "2015-05-21T04:00:13+00:00",
                "nautical_twilight_end": "2015-05-21T20:28:21+00:00",
                "astronomical_twilight_begin": "2015-05-21T03:20:49+00:00",
                "astronomical_twilight_end": "2015-05-21T21:07:45+00:00"
            },
            "status": "OK"
        })
    }

    #[tokio::test]
    async fn test_success_carries_parsed_instants() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param(LATITUDE_PARAM, "36.72"))
            .and(query_param(LONGITUDE_PARAM, "-4.421"))
            .and(query_param(FORMATTED_PARAM.0, FORMATTED_PARAM.1))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(51_444)))
            .mount(&server)
            .await;

        let client = SunriseClient::with_base_url(server.uri());
        let outcome = client.lookup(Coordinate::new(36.72, -4.421)).await;

        match outcome {
            LookupOutcome::Success(report) => {
                assert_eq!(report.day_length_seconds, 51_444);
                assert_eq!(
                    report.sunrise,
                    "2015-05-21T05:05:35+00:00".parse::<DateTime<Utc>>().unwrap()
                );
                assert_eq!(
                    report.sunset,
                    "2015-05-21T19:22:59+00:00".parse::<DateTime<Utc>>().unwrap()
                );
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_zero_day_length_is_no_sunrise() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(0)))
            .mount(&server)
            .await;

        let client = SunriseClient::with_base_url(server.uri());
        let outcome = client.lookup(Coordinate::new(89.9, 0.0)).await;

        assert!(matches!(outcome, LookupOutcome::NoSunrise));
    }

    /// The service reports errors with a bare string in `results`;
    /// the status must win over the undecodable payload.
    #[tokio::test]
    async fn test_non_ok_status_is_api_status_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": "",
                "status": "INVALID_REQUEST"
            })))
            .mount(&server)
            .await;

        let client = SunriseClient::with_base_url(server.uri());
        let outcome = client.lookup(Coordinate::new(0.0, 0.0)).await;

        match outcome {
            LookupOutcome::Failure(LookupError::ApiStatus(status)) => {
                assert_eq!(status, "INVALID_REQUEST");
            }
            other => panic!("expected api status failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_failure() {
        // Reserved port, nothing listens there.
        let client = SunriseClient::with_base_url("http://127.0.0.1:1");
        let outcome = client.lookup(Coordinate::new(0.0, 0.0)).await;

        assert!(matches!(
            outcome,
            LookupOutcome::Failure(LookupError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = SunriseClient::with_base_url(server.uri());
        let outcome = client.lookup(Coordinate::new(0.0, 0.0)).await;

        assert!(matches!(
            outcome,
            LookupOutcome::Failure(LookupError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_results_is_payload_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": { "sunrise": "not a timestamp" },
                "status": "OK"
            })))
            .mount(&server)
            .await;

        let client = SunriseClient::with_base_url(server.uri());
        let outcome = client.lookup(Coordinate::new(0.0, 0.0)).await;

        assert!(matches!(
            outcome,
            LookupOutcome::Failure(LookupError::Payload(_))
        ));
    }
}
