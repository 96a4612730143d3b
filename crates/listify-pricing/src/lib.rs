//! Retail price-range estimation from web search snippets.
//!
//! Searches for the product, pulls dollar amounts out of result titles and
//! snippets, and summarizes them as a min/avg/max range. Every failure maps to
//! a [`PriceSource`] tag instead of an error.

pub mod estimator;
pub mod extract;
pub mod types;

pub use estimator::{build_query, PriceEstimator, PRICE_SAMPLE_RESULTS};
pub use extract::{collect_prices, extract_prices, summarize};
pub use types::{PriceEstimate, PriceRange, PriceSource};
