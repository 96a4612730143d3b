use thiserror::Error;

/// Errors returned by the Custom Search client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// `GOOGLE_API_KEY` or `GOOGLE_CSE_ID` is not configured. No request was sent.
    #[error("search API credentials are not configured")]
    NotConfigured,

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 429: the daily query quota is used up or requests are throttled.
    #[error("search API quota exceeded")]
    QuotaExceeded,

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
