use serde::Deserialize;

/// Top-level Custom Search response. Only the fields we read are modelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "searchInformation", default)]
    pub search_information: Option<SearchInformation>,
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchInformation {
    /// Estimated result count. Google sends a decimal string (`"12300"`);
    /// some proxies send a bare number, so both are accepted.
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl SearchResponse {
    /// Estimated total result count, or `0` when absent or unparseable.
    #[must_use]
    pub fn total_results(&self) -> u64 {
        self.search_information
            .as_ref()
            .and_then(|info| info.total_results.as_ref())
            .and_then(|raw| match raw {
                serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
                serde_json::Value::Number(n) => n.as_u64(),
                _ => None,
            })
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> SearchResponse {
        serde_json::from_value(body).expect("response should parse")
    }

    #[test]
    fn total_results_parses_string_count() {
        let resp = parse(serde_json::json!({
            "searchInformation": { "totalResults": "48200" }
        }));
        assert_eq!(resp.total_results(), 48_200);
    }

    #[test]
    fn total_results_accepts_numeric_count() {
        let resp = parse(serde_json::json!({
            "searchInformation": { "totalResults": 17 }
        }));
        assert_eq!(resp.total_results(), 17);
    }

    #[test]
    fn total_results_defaults_to_zero_when_missing() {
        assert_eq!(parse(serde_json::json!({})).total_results(), 0);
        assert_eq!(
            parse(serde_json::json!({ "searchInformation": {} })).total_results(),
            0
        );
    }

    #[test]
    fn total_results_defaults_to_zero_when_garbage() {
        let resp = parse(serde_json::json!({
            "searchInformation": { "totalResults": "about a million" }
        }));
        assert_eq!(resp.total_results(), 0);
    }

    #[test]
    fn items_default_missing_fields() {
        let resp = parse(serde_json::json!({
            "items": [{ "title": "Trail Runner" }]
        }));
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].title, "Trail Runner");
        assert!(resp.items[0].snippet.is_empty());
    }
}
