//! Lexical keyword scorer.

use listify_core::ProductAttributes;

/// Terms that signal purchase intent. Matched as substrings of the lowercased
/// keyword, so "comfortable" counts via "for".
pub(crate) const BUYER_TERMS: &[&str] = &["buy", "best", "price", "cheap", "online", "for", "new"];

const BUYER_INTENT_HIT: f64 = 0.35;
const BUYER_INTENT_MISS: f64 = 0.15;

const LENGTH_SWEET_SPOT: f64 = 0.35;
const LENGTH_LONG_TAIL: f64 = 0.2;
const LENGTH_SINGLE: f64 = 0.1;

const CLEAN_CHARS: f64 = 0.2;
const NOISY_CHARS: f64 = 0.05;

const ATTRIBUTE_OVERLAP: f64 = 0.1;

/// Score a keyword's intrinsic relevance in `[0.0, 1.0]`.
///
/// Additive: buyer intent (0.35 / 0.15), token count (2-4 tokens 0.35, more
/// 0.2, fewer 0.1), character hygiene (only alphanumerics, spaces and hyphens
/// 0.2, else 0.05), and 0.1 if any attribute value appears in the keyword.
/// The sum is capped at `1.0`; rounding is left to the caller.
#[must_use]
pub fn heuristic_score(keyword: &str, attributes: &ProductAttributes) -> f64 {
    let lowered = keyword.to_lowercase();
    let mut score = 0.0_f64;

    score += if BUYER_TERMS.iter().any(|term| lowered.contains(term)) {
        BUYER_INTENT_HIT
    } else {
        BUYER_INTENT_MISS
    };

    score += match keyword.split_whitespace().count() {
        2..=4 => LENGTH_SWEET_SPOT,
        0 | 1 => LENGTH_SINGLE,
        _ => LENGTH_LONG_TAIL,
    };

    score += if keyword
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-')
    {
        CLEAN_CHARS
    } else {
        NOISY_CHARS
    };

    if mentions_attribute(&lowered, attributes) {
        score += ATTRIBUTE_OVERLAP;
    }

    score.min(1.0)
}

/// Values are matched untrimmed, so an empty value matches every keyword.
fn mentions_attribute(lowered_keyword: &str, attributes: &ProductAttributes) -> bool {
    attributes
        .values()
        .iter()
        .any(|value| lowered_keyword.contains(&value.to_lowercase()))
}
