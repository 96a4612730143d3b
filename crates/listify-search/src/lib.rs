//! Typed client for the Google Custom Search JSON API.
//!
//! Used as the search-volume signal for keyword ranking and as the snippet
//! source for price estimation.

pub mod client;
pub mod error;
pub mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use types::{SearchItem, SearchResponse};
