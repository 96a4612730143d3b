//! Keyword ranking for product listings.
//!
//! Scores candidate SEO keywords with a lexical heuristic, looks up how
//! saturated each keyword is on web search, and blends the two into a single
//! ranking. Search lookups fan out concurrently, are cached with a TTL, and
//! degrade to an "unknown" signal on any provider failure so a ranking is
//! always produced.

pub mod cache;
pub mod competition;
pub mod error;
pub mod ranking;
pub mod scorer;
pub mod source;
pub mod types;

pub use cache::{CacheConfig, PopularityCache};
pub use competition::normalize;
pub use error::SeoError;
pub use ranking::{combined_score, RankingEngine, DEFAULT_MAX_KEYWORDS};
pub use scorer::heuristic_score;
pub use source::{PopularitySource, SearchCountProvider};
pub use types::{CompetitionSignal, Difficulty, KeywordRecord, ScoredKeyword};
