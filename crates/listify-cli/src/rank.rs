//! Attribute input for the `rank` command.

use std::path::Path;

use anyhow::Context;
use listify_core::ProductAttributes;

/// Parse a `key=value` attribute argument.
pub(crate) fn parse_attr(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("attribute name is empty in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Attributes from an optional YAML file, then `--attr` overrides on top.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a YAML mapping of
/// attribute names to values.
pub(crate) fn load_attributes(
    file: Option<&Path>,
    overrides: &[(String, String)],
) -> anyhow::Result<ProductAttributes> {
    let mut attributes = match file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading attributes file {}", path.display()))?;
            parse_attributes_yaml(&raw)
                .with_context(|| format!("parsing attributes file {}", path.display()))?
        }
        None => ProductAttributes::default(),
    };

    for (key, value) in overrides {
        attributes.set(key, value.as_str());
    }
    Ok(attributes)
}

fn parse_attributes_yaml(raw: &str) -> Result<ProductAttributes, serde_yaml::Error> {
    // An empty document deserializes as unit, not as an empty mapping.
    if raw.trim().is_empty() {
        return Ok(ProductAttributes::default());
    }
    serde_yaml::from_str(raw)
}
