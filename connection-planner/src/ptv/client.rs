//! PTV timetable API HTTP client.
//!
//! Builds signed request URLs, issues them one at a time, and converts the
//! responses to domain types. Requests are never retried.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::form_urlencoded;

use crate::domain::{DirectionId, RouteId, RouteType, RunId, StopId, StoppingPattern};

use super::convert::{DepartureBoard, convert_departures, convert_pattern};
use super::error::PtvError;
use super::signing::sign_request;
use super::types::{DeparturesResponse, PatternResponse};

/// Default base URL for the PTV timetable API.
const DEFAULT_BASE_URL: &str = "https://timetableapi.ptv.vic.gov.au";

/// Format of `date_utc` query parameters.
const DATE_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Configuration for the PTV client.
#[derive(Debug, Clone)]
pub struct PtvConfig {
    /// Developer id issued by PTV
    pub dev_id: String,
    /// Shared secret used to sign requests
    pub key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PtvConfig {
    /// Create a new config with the given credentials.
    pub fn new(dev_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            dev_id: dev_id.into(),
            key: key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Parameters for a departures request.
#[derive(Debug, Clone)]
pub struct DeparturesQuery {
    pub route_type: RouteType,
    pub stop_id: StopId,
    /// Restrict to one route.
    pub route_id: Option<RouteId>,
    pub direction_id: DirectionId,
    pub max_results: u32,
    /// Ask for the `runs` map alongside the departures.
    pub expand_runs: bool,
    pub at_or_after: DateTime<Utc>,
}

impl DeparturesQuery {
    /// Path and query, unsigned.
    pub fn path_and_query(&self) -> String {
        let mut path = format!(
            "/v3/departures/route_type/{}/stop/{}",
            self.route_type, self.stop_id
        );
        if let Some(route_id) = self.route_id {
            path.push_str(&format!("/route/{route_id}"));
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("direction_id", &self.direction_id.to_string());
        query.append_pair("max_results", &self.max_results.to_string());
        if self.expand_runs {
            query.append_pair("expand", "run");
        }
        query.append_pair("date_utc", &format_date_utc(self.at_or_after));

        format!("{path}?{}", query.finish())
    }
}

/// Path and query for a stopping pattern request, unsigned.
pub fn pattern_path_and_query(
    run_id: RunId,
    route_type: RouteType,
    at_or_after: DateTime<Utc>,
) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("date_utc", &format_date_utc(at_or_after))
        .finish();
    format!("/v3/pattern/run/{run_id}/route_type/{route_type}?{query}")
}

fn format_date_utc(at: DateTime<Utc>) -> String {
    at.format(DATE_UTC_FORMAT).to_string()
}

/// PTV timetable API client.
#[derive(Debug, Clone)]
pub struct PtvClient {
    http: reqwest::Client,
    base_url: String,
    dev_id: String,
    key: String,
}

impl PtvClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PtvConfig) -> Result<Self, PtvError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            dev_id: config.dev_id,
            key: config.key,
        })
    }

    /// Full signed URL for a path and query.
    pub fn signed_url(&self, path_and_query: &str) -> Result<String, PtvError> {
        let signed = sign_request(path_and_query, &self.dev_id, &self.key)?;
        Ok(format!("{}{}", self.base_url, signed))
    }

    /// Upcoming departures from a stop, in service order.
    pub async fn departures(&self, query: &DeparturesQuery) -> Result<DepartureBoard, PtvError> {
        let resp: DeparturesResponse = self.get_json(&query.path_and_query()).await?;
        debug!(
            stop = %query.stop_id,
            departures = resp.departures.len(),
            runs = resp.runs.len(),
            "fetched departures"
        );
        Ok(convert_departures(&resp)?)
    }

    /// The stopping pattern of a run.
    ///
    /// Returns `Ok(None)` when the response has no pattern section.
    pub async fn stopping_pattern(
        &self,
        run_id: RunId,
        route_type: RouteType,
        at_or_after: DateTime<Utc>,
    ) -> Result<Option<StoppingPattern>, PtvError> {
        let path = pattern_path_and_query(run_id, route_type, at_or_after);
        let resp: PatternResponse = self.get_json(&path).await?;
        debug!(
            run = %run_id,
            stops = ?resp.departures.as_ref().map(Vec::len),
            "fetched stopping pattern"
        );
        Ok(convert_pattern(run_id, &resp)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, PtvError> {
        let url = self.signed_url(path_and_query)?;
        debug!(path = path_and_query, "GET");

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(PtvError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PtvError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PtvError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
