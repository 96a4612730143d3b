use serde::{Deserialize, Serialize};

/// Human-readable bucket for how crowded a keyword's search results are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Unknown,
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Unknown => write!(f, "unknown"),
            Difficulty::Low => write!(f, "low"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::High => write!(f, "high"),
        }
    }
}

/// Normalized search-competition signal for one keyword.
///
/// `difficulty == Unknown` exactly when `total_results == 0`. A genuine
/// zero-result count and a failed lookup look the same; callers must not
/// read this pair as "confirmed zero competition".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompetitionSignal {
    pub total_results: u64,
    /// In `[0.0, 1.0]`, rounded to 3 decimals.
    pub competition_score: f64,
    pub difficulty: Difficulty,
}

impl CompetitionSignal {
    /// The signal used whenever a count could not be obtained.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            total_results: 0,
            competition_score: 0.0,
            difficulty: Difficulty::Unknown,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.difficulty == Difficulty::Unknown
    }
}

/// One ranked keyword: heuristic and competition signal fused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub keyword: String,
    pub heuristic_score: f64,
    pub total_results: u64,
    pub competition_score: f64,
    pub difficulty: Difficulty,
    pub combined_score: f64,
}

/// Storage and API shape of a [`ScoredKeyword`].
///
/// Field names are a stable contract with the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub heuristic_score: f64,
    pub google_total_results: u64,
    pub google_competition_score: f64,
    pub google_difficulty: Difficulty,
    pub combined_score: f64,
}

impl From<&ScoredKeyword> for KeywordRecord {
    fn from(scored: &ScoredKeyword) -> Self {
        Self {
            keyword: scored.keyword.clone(),
            heuristic_score: scored.heuristic_score,
            google_total_results: scored.total_results,
            google_competition_score: scored.competition_score,
            google_difficulty: scored.difficulty,
            combined_score: scored.combined_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_signal_is_all_zero() {
        let signal = CompetitionSignal::unknown();
        assert_eq!(signal.total_results, 0);
        assert_eq!(signal.competition_score, 0.0);
        assert!(signal.is_unknown());
    }

    #[test]
    fn keyword_record_uses_persistence_field_names() {
        let scored = ScoredKeyword {
            keyword: "running shoes".to_string(),
            heuristic_score: 0.65,
            total_results: 52_300,
            competition_score: 0.465,
            difficulty: Difficulty::Medium,
            combined_score: 0.604,
        };
        let json = serde_json::to_value(KeywordRecord::from(&scored)).expect("serialize");
        assert_eq!(json["google_total_results"], 52_300);
        assert_eq!(json["google_competition_score"], 0.465);
        assert_eq!(json["google_difficulty"], "medium");
        assert_eq!(json["combined_score"], 0.604);
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Unknown).expect("serialize");
        assert_eq!(json, "\"unknown\"");
        assert_eq!(Difficulty::High.to_string(), "high");
    }
}
