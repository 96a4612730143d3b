//! Keyword ranking: concurrent popularity fan-out, score fusion, stable sort.

use std::sync::Arc;

use futures::future::join_all;
use listify_core::ProductAttributes;

use crate::competition::round3;
use crate::error::SeoError;
use crate::scorer::heuristic_score;
use crate::source::{signal_or_unknown, PopularitySource, SearchCountProvider};
use crate::types::{CompetitionSignal, ScoredKeyword};

pub const DEFAULT_MAX_KEYWORDS: usize = 10;

const HEURISTIC_WEIGHT: f64 = 0.6;
const LOW_COMPETITION_WEIGHT: f64 = 0.4;

/// `0.6 * heuristic + 0.4 * (1 - competition)`, rounded to 3 decimals.
#[must_use]
pub fn combined_score(heuristic: f64, competition_score: f64) -> f64 {
    round3(HEURISTIC_WEIGHT * heuristic + LOW_COMPETITION_WEIGHT * (1.0 - competition_score))
}

/// Ranks candidate keywords against a shared [`PopularitySource`].
pub struct RankingEngine<P> {
    source: Arc<PopularitySource<P>>,
}

impl<P> Clone for RankingEngine<P> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<P: SearchCountProvider> RankingEngine<P> {
    #[must_use]
    pub fn new(source: PopularitySource<P>) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    #[must_use]
    pub fn source(&self) -> &PopularitySource<P> {
        &self.source
    }

    /// Rank up to `max_keywords` keywords, best first.
    ///
    /// 1. Keep the first `max_keywords` entries; the rest are dropped unscored.
    /// 2. Look up every kept keyword's competition signal concurrently, one
    ///    task per keyword. A failed or panicked lookup only affects its own
    ///    keyword, which is recorded with an unknown signal.
    /// 3. Fuse each heuristic score with its signal via [`combined_score`].
    /// 4. Stable-sort by combined score, descending; ties keep input order.
    ///
    /// If the provider is unavailable as a whole, no lookups are attempted and
    /// every keyword gets an unknown signal. The result always has one record
    /// per kept keyword; an empty input yields an empty result.
    pub async fn rank<K: AsRef<str>>(
        &self,
        keywords: &[K],
        attributes: &ProductAttributes,
        max_keywords: usize,
    ) -> Vec<ScoredKeyword> {
        let selected: Vec<String> = keywords
            .iter()
            .take(max_keywords)
            .map(|k| k.as_ref().to_owned())
            .collect();

        if selected.is_empty() {
            return Vec::new();
        }

        let signals = if self.source.is_available() {
            self.fan_out(&selected).await
        } else {
            tracing::warn!(
                keywords = selected.len(),
                "popularity source unavailable; ranking on heuristic score alone"
            );
            vec![CompetitionSignal::unknown(); selected.len()]
        };

        let mut scored: Vec<ScoredKeyword> = selected
            .into_iter()
            .zip(signals)
            .map(|(keyword, signal)| score_keyword(keyword, attributes, signal))
            .collect();

        // `sort_by` is stable, which is what keeps equal scores in input order.
        scored.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));

        tracing::debug!(
            ranked = scored.len(),
            top = scored.first().map(|s| s.keyword.as_str()),
            "keyword ranking complete"
        );

        scored
    }

    /// One lookup task per keyword; results come back in input order.
    async fn fan_out(&self, keywords: &[String]) -> Vec<CompetitionSignal> {
        let handles: Vec<_> = keywords
            .iter()
            .map(|keyword| {
                let source = Arc::clone(&self.source);
                let keyword = keyword.clone();
                tokio::spawn(async move { source.lookup(&keyword).await })
            })
            .collect();

        let outcomes = join_all(handles).await;

        keywords
            .iter()
            .zip(outcomes)
            .map(|(keyword, outcome)| {
                let result = outcome.unwrap_or_else(|join_err| {
                    Err(SeoError::TaskFailed {
                        keyword: keyword.clone(),
                        reason: join_err.to_string(),
                    })
                });
                signal_or_unknown(keyword, result)
            })
            .collect()
    }
}

fn score_keyword(
    keyword: String,
    attributes: &ProductAttributes,
    signal: CompetitionSignal,
) -> ScoredKeyword {
    let heuristic = heuristic_score(&keyword, attributes);
    ScoredKeyword {
        heuristic_score: round3(heuristic),
        total_results: signal.total_results,
        competition_score: signal.competition_score,
        difficulty: signal.difficulty,
        combined_score: combined_score(heuristic, signal.competition_score),
        keyword,
    }
}
