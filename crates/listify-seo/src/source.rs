//! Popularity lookups: search-result counts behind a cache and a timeout.

use std::future::Future;
use std::time::Duration;

use listify_search::{SearchClient, SearchError};

use crate::cache::PopularityCache;
use crate::competition::normalize;
use crate::error::SeoError;
use crate::types::CompetitionSignal;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Anything that can report an estimated result count for a search query.
pub trait SearchCountProvider: Send + Sync + 'static {
    /// `false` when the provider cannot serve any request at all (for example,
    /// credentials are missing). Rankers skip the fan-out entirely in that case.
    fn is_available(&self) -> bool {
        true
    }

    fn total_results(&self, query: &str)
        -> impl Future<Output = Result<u64, SearchError>> + Send;
}

impl SearchCountProvider for SearchClient {
    fn is_available(&self) -> bool {
        self.is_configured()
    }

    fn total_results(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<u64, SearchError>> + Send {
        SearchClient::total_results(self, query)
    }
}

/// Competition signals for single keywords.
///
/// Successful counts are cached per exact keyword; failures are not cached.
/// Concurrent lookups of the same uncached keyword each reach the provider.
pub struct PopularitySource<P> {
    provider: P,
    cache: PopularityCache,
    timeout: Duration,
}

impl<P: SearchCountProvider> PopularitySource<P> {
    #[must_use]
    pub fn new(provider: P, cache: PopularityCache, timeout: Duration) -> Self {
        Self {
            provider,
            cache,
            timeout,
        }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn cache(&self) -> &PopularityCache {
        &self.cache
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.provider.is_available()
    }

    /// Look up the competition signal for `keyword`.
    ///
    /// # Errors
    ///
    /// - [`SeoError::Provider`] if the provider call fails.
    /// - [`SeoError::Timeout`] if the provider does not answer within the
    ///   configured timeout.
    pub async fn lookup(&self, keyword: &str) -> Result<CompetitionSignal, SeoError> {
        if let Some(total_results) = self.cache.get(keyword).await {
            tracing::debug!(keyword, total_results, "popularity cache hit");
            return Ok(normalize(total_results));
        }

        let total_results = tokio::time::timeout(self.timeout, self.provider.total_results(keyword))
            .await
            .map_err(|_| SeoError::Timeout {
                keyword: keyword.to_owned(),
                timeout: self.timeout,
            })??;

        self.cache.insert(keyword, total_results).await;
        Ok(normalize(total_results))
    }

    /// Like [`PopularitySource::lookup`], but any failure becomes
    /// [`CompetitionSignal::unknown`] after being logged.
    pub async fn fetch(&self, keyword: &str) -> CompetitionSignal {
        signal_or_unknown(keyword, self.lookup(keyword).await)
    }
}

/// The signal from a lookup result; a failure is logged and becomes
/// [`CompetitionSignal::unknown`].
pub(crate) fn signal_or_unknown(
    keyword: &str,
    result: Result<CompetitionSignal, SeoError>,
) -> CompetitionSignal {
    match result {
        Ok(signal) => signal,
        Err(e) => {
            tracing::warn!(
                keyword,
                error = %e,
                "popularity lookup failed; competition unknown"
            );
            CompetitionSignal::unknown()
        }
    }
}
