//! Sprint tracker lookups over HTTP.
//!
//! The tracker exposes an iterations query endpoint ordered by end date, so a
//! single basic-auth GET with `pagesize=1` returns the current sprint's
//! display name.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::TrackerError;

/// Default iterations endpoint base URL.
pub const DEFAULT_TRACKER_URL: &str = "https://rally1.rallydev.com/slm/webservice/v3.0";

/// How long to wait for the tracker before treating it as unavailable.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Capability contract for asking the tracker which sprint is current.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SprintTracker: Send + Sync {
    /// Display name of the current sprint, e.g. `Sprint 57: Browser testing`.
    async fn current_sprint_name(&self) -> Result<String, TrackerError>;
}

/// Response envelope of the iterations query endpoint.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(rename = "QueryResult")]
    query_result: QueryResult,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    #[serde(rename = "Results", default)]
    results: Vec<IterationRef>,
}

#[derive(Debug, Deserialize)]
struct IterationRef {
    #[serde(rename = "_refObjectName")]
    name: Option<String>,
}

/// Tracker client over HTTP basic auth.
pub struct HttpTracker {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpTracker {
    /// Build a client against `base_url` with the default request timeout.
    ///
    /// A tracker that does not answer within the timeout is reported as
    /// unavailable; the release pipeline then degrades to operator-driven
    /// bump selection. There is no retry.
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self, TrackerError> {
        Self::with_timeout(base_url, username, password, REQUEST_TIMEOUT)
    }

    /// Build a client with an explicit request timeout.
    pub fn with_timeout(
        base_url: &str,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TrackerError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    fn iterations_url(&self) -> String {
        format!("{}/iteration", self.base_url)
    }
}

#[async_trait]
impl SprintTracker for HttpTracker {
    async fn current_sprint_name(&self) -> Result<String, TrackerError> {
        let response = self
            .client
            .get(self.iterations_url())
            .basic_auth(&self.username, Some(&self.password))
            .query(&[
                ("query", ""),
                ("order", "EndDate desc"),
                ("start", "1"),
                ("pagesize", "1"),
            ])
            .send()
            .await
            .map_err(TrackerError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::BadStatus { status });
        }

        let envelope: QueryResponse = response
            .json()
            .await
            .map_err(TrackerError::InvalidResponse)?;

        let name = envelope
            .query_result
            .results
            .into_iter()
            .next()
            .and_then(|iteration| iteration.name)
            .ok_or(TrackerError::MissingSprintName)?;

        debug!(sprint = %name, "Tracker reported current sprint");
        Ok(name)
    }
}
