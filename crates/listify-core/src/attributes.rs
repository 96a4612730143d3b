//! Product attributes extracted from a listing photo.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute name/value pairs describing one product.
///
/// The five well-known attributes are typed fields; anything else the model
/// returns lands in `extra`. Missing keys and JSON `null` both mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ProductAttributes {
    /// Sets an attribute by name. Well-known names go to their typed field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name.trim().to_lowercase().as_str() {
            "category" => self.category = Some(value),
            "color" | "colour" => self.color = Some(value),
            "material" => self.material = Some(value),
            "brand" => self.brand = Some(value),
            "other" => self.other = Some(value),
            _ => {
                self.extra.insert(name.trim().to_string(), Value::String(value));
            }
        }
    }

    /// All present attribute values rendered as text, typed fields first.
    ///
    /// Non-string `extra` values (numbers, booleans) are rendered with their
    /// JSON representation; `null` entries are skipped.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        let typed = [
            &self.category,
            &self.color,
            &self.material,
            &self.brand,
            &self.other,
        ];
        let mut out: Vec<String> = typed.into_iter().flatten().cloned().collect();
        for value in self.extra.values() {
            match value {
                Value::Null => {}
                Value::String(s) => out.push(s.clone()),
                other => out.push(other.to_string()),
            }
        }
        out
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}
