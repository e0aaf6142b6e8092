//! Blocking HTTP client for the ClinicalTrials.gov full-studies API.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use ctae_model::{AeError, Result, TrialData, TrialId};
use ctae_transform::TrialSource;

use crate::payload::ResponseEnvelope;

/// Public registry endpoint.
pub const DEFAULT_REGISTRY_URL: &str = "https://clinicaltrials.gov";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("ctae/", env!("CARGO_PKG_VERSION"));

/// Registry client: one GET per trial identifier, no caching.
///
/// Queries run sequentially on the calling thread; timeout policy is
/// left to reqwest's defaults.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_REGISTRY_URL)
    }

    /// Point the client at a different base URL (mirror or test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AeError::Fetch(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn study_url(&self, id: &TrialId) -> String {
        format!(
            "{}/api/query/full_studies?expr={}&max_rnk=1&fmt=JSON",
            self.base_url, id
        )
    }

    /// Fetch and decode one trial's payload.
    ///
    /// Network failures, non-success statuses and malformed JSON all
    /// surface as [`AeError::Fetch`]; a payload without a results
    /// section is still `Ok`, with `adverse_events` unset.
    pub fn fetch_study(&self, id: &TrialId) -> Result<TrialData> {
        let url = self.study_url(id);
        tracing::debug!(%id, %url, "fetching trial payload");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AeError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AeError::Fetch(format!(
                "registry returned HTTP {status} for {id}"
            )));
        }

        let envelope: ResponseEnvelope = response
            .json()
            .map_err(|e| AeError::Fetch(format!("malformed registry response: {e}")))?;
        envelope.into_trial_data()
    }
}

impl TrialSource for RegistryClient {
    fn fetch(&self, id: &TrialId) -> Result<TrialData> {
        self.fetch_study(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_legacy_query_url() {
        let client = RegistryClient::with_base_url("https://example.org/").expect("client");
        let id = TrialId::new("NCT01234567").expect("id");
        assert_eq!(
            client.study_url(&id),
            "https://example.org/api/query/full_studies?expr=NCT01234567&max_rnk=1&fmt=JSON"
        );
    }

    #[test]
    fn client_creation_succeeds() {
        assert!(RegistryClient::new().is_ok());
    }
}
