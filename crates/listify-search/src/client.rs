//! HTTP client for the Custom Search JSON API.
//!
//! Wraps `reqwest` with credential handling and typed errors. Missing
//! credentials surface as [`SearchError::NotConfigured`] before any request is
//! sent, so callers can treat "not configured" like any other provider failure.

use std::time::Duration;

use listify_core::SearchCredentials;
use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::SearchResponse;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/";
const SEARCH_PATH: &str = "customsearch/v1";

/// The API rejects `num` outside `1..=10`.
const MAX_RESULTS_PER_PAGE: u8 = 10;

/// Client for the Custom Search JSON API.
///
/// Use [`SearchClient::new`] for production or [`SearchClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    credentials: Option<SearchCredentials>,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a client pointed at the production Google endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        credentials: Option<SearchCredentials>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SearchError> {
        Self::with_base_url(credentials, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        credentials: Option<SearchCredentials>,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replaces
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(SEARCH_PATH))
            .map_err(|e| SearchError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            credentials,
            endpoint,
        })
    }

    /// Whether both the API key and the engine id are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Runs one search query and returns up to `num` result items.
    ///
    /// `num` is clamped to the API's accepted range of `1..=10`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::NotConfigured`] if credentials are missing.
    /// - [`SearchError::QuotaExceeded`] on HTTP 429.
    /// - [`SearchError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`SearchError::Http`] on network failure or timeout.
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON.
    pub async fn search(&self, query: &str, num: u8) -> Result<SearchResponse, SearchError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SearchError::NotConfigured)?;
        let url = self.build_url(credentials, query, num);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SearchError::QuotaExceeded);
        }

        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
            SearchError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            }
        })?;

        tracing::debug!(
            query,
            total_results = parsed.total_results(),
            items = parsed.items.len(),
            "search completed"
        );

        Ok(parsed)
    }

    /// Returns the estimated total result count for `query`.
    ///
    /// Requests a single item since only the count is read. A missing or
    /// unparseable count comes back as `0`.
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::search`].
    pub async fn total_results(&self, query: &str) -> Result<u64, SearchError> {
        let response = self.search(query, 1).await?;
        Ok(response.total_results())
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, credentials: &SearchCredentials, query: &str, num: u8) -> Url {
        let num = num.clamp(1, MAX_RESULTS_PER_PAGE).to_string();
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &credentials.api_key)
            .append_pair("cx", &credentials.engine_id)
            .append_pair("q", query)
            .append_pair("num", &num);
        url
    }
}
