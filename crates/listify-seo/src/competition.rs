//! Maps a raw search-result count onto a bounded competition signal.

use crate::types::{CompetitionSignal, Difficulty};

/// Counts at or below 10^FLOOR_EXPONENT score 0.
const FLOOR_EXPONENT: f64 = 1.0;
/// Counts at or above 10^CEILING_EXPONENT score 1.
const CEILING_EXPONENT: f64 = 9.0;

const LOW_DIFFICULTY_BELOW: u64 = 1_000;
const MEDIUM_DIFFICULTY_BELOW: u64 = 100_000;

/// Normalize a total-result count into a [`CompetitionSignal`].
///
/// The score is `log10(count)` mapped linearly from `[1, 9]` onto `[0, 1]`,
/// clamped and rounded to 3 decimals. A zero count yields
/// [`CompetitionSignal::unknown`].
#[must_use]
pub fn normalize(total_results: u64) -> CompetitionSignal {
    if total_results == 0 {
        return CompetitionSignal::unknown();
    }

    #[allow(clippy::cast_precision_loss)]
    let magnitude = (total_results as f64).log10();
    let score = ((magnitude - FLOOR_EXPONENT) / (CEILING_EXPONENT - FLOOR_EXPONENT)).clamp(0.0, 1.0);

    let difficulty = if total_results < LOW_DIFFICULTY_BELOW {
        Difficulty::Low
    } else if total_results < MEDIUM_DIFFICULTY_BELOW {
        Difficulty::Medium
    } else {
        Difficulty::High
    };

    CompetitionSignal {
        total_results,
        competition_score: round3(score),
        difficulty,
    }
}

/// Round to 3 decimal places.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
