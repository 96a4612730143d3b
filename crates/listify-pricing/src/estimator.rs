use listify_search::{SearchClient, SearchError};

use crate::extract::{collect_prices, summarize};
use crate::types::{PriceEstimate, PriceSource};

/// Results requested per price search; the API maximum.
pub const PRICE_SAMPLE_RESULTS: u8 = 10;

/// `"{category} {title} price buy"`, or `"{title} price buy"` when the
/// category is absent or empty.
#[must_use]
pub fn build_query(title: &str, category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => format!("{category} {title} price buy"),
        None => format!("{title} price buy"),
    }
}

/// Estimates a retail price range from shopping-oriented web search results.
pub struct PriceEstimator {
    client: SearchClient,
}

impl PriceEstimator {
    #[must_use]
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }

    /// Search for `title` and summarize the prices found in the results.
    ///
    /// Never fails: a missing range is explained by [`PriceEstimate::source`].
    pub async fn estimate(&self, title: &str, category: Option<&str>) -> PriceEstimate {
        if !self.client.is_configured() {
            tracing::warn!("search credentials not configured; skipping price lookup");
            return PriceEstimate::unavailable(PriceSource::ApiNotConfigured);
        }

        let query = build_query(title, category);
        let response = match self.client.search(&query, PRICE_SAMPLE_RESULTS).await {
            Ok(response) => response,
            Err(e) => {
                let source = failure_source(&e);
                tracing::warn!(title, error = %e, %source, "price search failed");
                return PriceEstimate::unavailable(source);
            }
        };

        let prices = collect_prices(&response.items);
        let Some(range) = summarize(&prices) else {
            tracing::info!(title, items = response.items.len(), "no prices found");
            return PriceEstimate::unavailable(PriceSource::NoPricesFound);
        };

        tracing::info!(
            title,
            samples = range.samples_found,
            min_price = range.min_price,
            max_price = range.max_price,
            "price range estimated"
        );
        PriceEstimate::found(range)
    }
}

fn failure_source(error: &SearchError) -> PriceSource {
    match error {
        SearchError::NotConfigured => PriceSource::ApiNotConfigured,
        SearchError::QuotaExceeded => PriceSource::ApiQuotaExceeded,
        SearchError::UnexpectedStatus { .. } => PriceSource::ApiError,
        SearchError::Http(_) | SearchError::Deserialize { .. } | SearchError::InvalidBaseUrl { .. } => {
            PriceSource::Error
        }
    }
}
