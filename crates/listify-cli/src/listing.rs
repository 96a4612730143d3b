//! Listing assembly from a model's product analysis.
//!
//! The model is asked for bare JSON but often wraps it in a markdown fence or
//! surrounds it with prose. [`extract_json`] digs the object out before it is
//! parsed into a [`ProductAnalysis`].

use std::io::Read;
use std::sync::LazyLock;

use anyhow::Context;
use chrono::{DateTime, Utc};
use listify_core::ProductAttributes;
use listify_pricing::{PriceEstimate, PriceEstimator};
use listify_seo::{KeywordRecord, RankingEngine, SearchCountProvider};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ranked keywords shown as listing tags.
pub(crate) const TAG_LIMIT: usize = 6;
pub(crate) const PROMOTIONAL_TAG_LIMIT: usize = 6;

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid fenced json regex")
});
static BARE_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(\{.*\})").expect("valid bare json regex"));

/// Marketing copy, keywords and attributes produced by the model.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProductAnalysis {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "keyword_list")]
    pub seo_keywords: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub promotional_tags: Vec<String>,
    #[serde(default, deserialize_with = "attributes_or_default")]
    pub attributes: ProductAttributes,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Listing {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub tags: Vec<String>,
    pub promotional_tags: Vec<String>,
    /// The found estimate, including its `source`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceEstimate>,
    pub keywords: Vec<KeywordRecord>,
    pub generated_at: DateTime<Utc>,
}

/// Read the model response from a file, or from stdin when `input` is `-`.
pub(crate) fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("reading model response from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(input).with_context(|| format!("reading model response from {input}"))
}

/// The JSON object inside a model response.
///
/// Prefers a fenced code block, then the span from the first `{` to the last
/// `}`, then the trimmed text as-is.
pub(crate) fn extract_json(text: &str) -> &str {
    let cleaned = text.trim();
    FENCED_JSON
        .captures(cleaned)
        .or_else(|| BARE_JSON.captures(cleaned))
        .and_then(|caps| caps.get(1))
        .map_or(cleaned, |m| m.as_str())
}

/// Parse a raw model response into a [`ProductAnalysis`].
///
/// # Errors
///
/// Returns an error if no valid JSON object can be recovered from `text`.
pub(crate) fn parse_analysis(text: &str) -> anyhow::Result<ProductAnalysis> {
    if text.trim().is_empty() {
        anyhow::bail!("model response is empty");
    }
    serde_json::from_str(extract_json(text)).context("model response is not valid analysis JSON")
}

/// Rank the analysis keywords, estimate a price, and assemble the listing.
///
/// Ranking and price estimation run concurrently. Neither can fail: missing
/// search data degrades keyword competition to unknown and leaves the price
/// range out.
pub(crate) async fn build_listing<P: SearchCountProvider>(
    analysis: ProductAnalysis,
    engine: &RankingEngine<P>,
    estimator: &PriceEstimator,
    max_keywords: usize,
) -> Listing {
    let title = analysis.title.clone().unwrap_or_default();
    let category = analysis.attributes.category.clone();

    let (ranked, estimate) = tokio::join!(
        engine.rank(&analysis.seo_keywords, &analysis.attributes, max_keywords),
        estimator.estimate(&title, category.as_deref()),
    );

    let price_range = if estimate.is_found() {
        Some(estimate)
    } else {
        tracing::info!(title = %title, source = %estimate.source, "no web price range");
        None
    };

    let tags = ranked
        .iter()
        .take(TAG_LIMIT)
        .map(|r| r.keyword.clone())
        .collect();
    let keywords = ranked.iter().map(KeywordRecord::from).collect();

    let mut promotional_tags = analysis.promotional_tags;
    promotional_tags.truncate(PROMOTIONAL_TAG_LIMIT);

    Listing {
        title: analysis.title,
        description: analysis.description,
        short_description: analysis.short_description,
        meta_title: analysis.meta_title,
        meta_description: analysis.meta_description,
        tags,
        promotional_tags,
        price_range,
        keywords,
        generated_at: Utc::now(),
    }
}

/// A list, or a single value treated as a one-element list. Falsy entries
/// (`null`, `false`, `0`, `""`, empty arrays and objects) are dropped and the
/// rest rendered as text, with `true` spelled `True`.
fn keyword_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let items = match raw {
        Value::Array(items) => items,
        other => vec![other],
    };
    Ok(items
        .into_iter()
        .filter(is_truthy)
        .map(|v| match v {
            Value::String(s) => s,
            Value::Bool(true) => "True".to_string(),
            other => other.to_string(),
        })
        .collect())
}

/// A list or a single value. Only `null` entries are dropped; non-strings are
/// rendered as text.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Some(Value::String(s)) => vec![s],
        Some(other) => vec![other.to_string()],
    })
}

fn attributes_or_default<'de, D>(deserializer: D) -> Result<ProductAttributes, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ProductAttributes>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
