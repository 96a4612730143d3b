//! Wiring from `AppConfig` to the search-backed services.

use std::time::Duration;

use listify_core::AppConfig;
use listify_pricing::PriceEstimator;
use listify_search::SearchClient;
use listify_seo::{CacheConfig, PopularityCache, PopularitySource, RankingEngine};

fn search_client(config: &AppConfig) -> anyhow::Result<SearchClient> {
    let client = SearchClient::with_base_url(
        config.search_credentials.clone(),
        config.search_timeout_secs,
        &config.user_agent,
        &config.search_base_url,
    )?;
    Ok(client)
}

pub(crate) fn ranking_engine(config: &AppConfig) -> anyhow::Result<RankingEngine<SearchClient>> {
    if config.search_credentials.is_none() {
        tracing::warn!(
            "GOOGLE_API_KEY / GOOGLE_CSE_ID not set; ranking falls back to heuristic scores"
        );
    }
    let cache = PopularityCache::new(CacheConfig {
        capacity: config.popularity_cache_capacity,
        ttl: Duration::from_secs(config.popularity_cache_ttl_secs),
    });
    let source = PopularitySource::new(
        search_client(config)?,
        cache,
        Duration::from_secs(config.search_timeout_secs),
    );
    Ok(RankingEngine::new(source))
}

pub(crate) fn price_estimator(config: &AppConfig) -> anyhow::Result<PriceEstimator> {
    Ok(PriceEstimator::new(search_client(config)?))
}
