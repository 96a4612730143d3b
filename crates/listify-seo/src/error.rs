use std::time::Duration;

use listify_search::SearchError;
use thiserror::Error;

/// Why a single keyword's popularity lookup produced no signal.
///
/// These never escape a ranking call; the engine logs them and records the
/// keyword with an unknown competition signal.
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("search provider error: {0}")]
    Provider(#[from] SearchError),

    #[error("popularity lookup for '{keyword}' timed out after {timeout:?}")]
    Timeout { keyword: String, timeout: Duration },

    /// The lookup task panicked or was cancelled before producing a result.
    #[error("popularity lookup task for '{keyword}' failed: {reason}")]
    TaskFailed { keyword: String, reason: String },
}
