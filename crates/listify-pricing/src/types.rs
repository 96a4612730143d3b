use serde::{Deserialize, Serialize};

/// Where a [`PriceEstimate`] came from, or why there is no range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    GoogleSearch,
    ApiNotConfigured,
    NoPricesFound,
    ApiQuotaExceeded,
    ApiError,
    Error,
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSource::GoogleSearch => write!(f, "google_search"),
            PriceSource::ApiNotConfigured => write!(f, "api_not_configured"),
            PriceSource::NoPricesFound => write!(f, "no_prices_found"),
            PriceSource::ApiQuotaExceeded => write!(f, "api_quota_exceeded"),
            PriceSource::ApiError => write!(f, "api_error"),
            PriceSource::Error => write!(f, "error"),
        }
    }
}

/// Summary of the distinct prices seen in search results. Values are rounded
/// to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_price: f64,
    pub avg_price: f64,
    pub max_price: f64,
    pub samples_found: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    #[serde(flatten)]
    pub range: Option<PriceRange>,
    pub source: PriceSource,
}

impl PriceEstimate {
    #[must_use]
    pub fn found(range: PriceRange) -> Self {
        Self {
            range: Some(range),
            source: PriceSource::GoogleSearch,
        }
    }

    #[must_use]
    pub fn unavailable(source: PriceSource) -> Self {
        Self {
            range: None,
            source,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.range.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_serializes_as_snake_case_tag() {
        let json = serde_json::to_value(PriceSource::ApiQuotaExceeded).unwrap();
        assert_eq!(json, serde_json::json!("api_quota_exceeded"));
        assert_eq!(PriceSource::NoPricesFound.to_string(), "no_prices_found");
    }

    #[test]
    fn found_estimate_flattens_range() {
        let estimate = PriceEstimate::found(PriceRange {
            min_price: 19.99,
            avg_price: 42.5,
            max_price: 65.0,
            samples_found: 3,
        });
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "min_price": 19.99,
                "avg_price": 42.5,
                "max_price": 65.0,
                "samples_found": 3,
                "source": "google_search"
            })
        );
    }

    #[test]
    fn unavailable_estimate_carries_only_source() {
        let estimate = PriceEstimate::unavailable(PriceSource::ApiError);
        assert!(!estimate.is_found());
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json, serde_json::json!({ "source": "api_error" }));
    }
}
