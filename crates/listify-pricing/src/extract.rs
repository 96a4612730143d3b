//! Dollar-amount extraction from free text.

use std::sync::LazyLock;

use listify_search::SearchItem;
use regex::Regex;

use crate::types::PriceRange;

/// `$299`, `$ 299.99`, `USD 75`, `120 dollars`, `49,99 USD`.
static PRICE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\$\s*(\d{1,5}(?:[.,]\d{2})?)").expect("valid dollar-sign regex"),
        Regex::new(r"(?i)USD\s*(\d{1,5}(?:[.,]\d{2})?)").expect("valid USD-prefix regex"),
        Regex::new(r"(?i)(\d{1,5}(?:[.,]\d{2})?)\s*(?:USD|dollars)")
            .expect("valid USD-suffix regex"),
    ]
});

/// Exclusive bounds for a plausible retail price.
const MIN_PRICE: f64 = 1.0;
const MAX_PRICE: f64 = 100_000.0;

/// Every plausible price mentioned in `text`, in pattern order.
///
/// Commas are stripped before parsing, so `49,99` reads as `4999`. Amounts
/// outside `(1, 100000)` are dropped. The same amount may appear more than
/// once when several patterns match it.
#[must_use]
pub fn extract_prices(text: &str) -> Vec<f64> {
    PRICE_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .filter(|price| *price > MIN_PRICE && *price < MAX_PRICE)
        .collect()
}

/// Distinct prices across all result items, ascending.
#[must_use]
pub fn collect_prices(items: &[SearchItem]) -> Vec<f64> {
    let mut prices: Vec<f64> = items
        .iter()
        .flat_map(|item| extract_prices(&format!("{} {}", item.title, item.snippet)))
        .collect();
    prices.sort_by(f64::total_cmp);
    prices.dedup();
    prices
}

/// Min, mean and max of `prices`, rounded to cents. `None` when empty.
#[must_use]
pub fn summarize(prices: &[f64]) -> Option<PriceRange> {
    let min = prices.iter().copied().min_by(f64::total_cmp)?;
    let max = prices.iter().copied().max_by(f64::total_cmp)?;
    #[allow(clippy::cast_precision_loss)]
    let avg = prices.iter().sum::<f64>() / prices.len() as f64;

    Some(PriceRange {
        min_price: round2(min),
        avg_price: round2(avg),
        max_price: round2(max),
        samples_found: prices.len(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
