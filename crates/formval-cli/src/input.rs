//! # Input Documents
//!
//! Loads the object to validate. The format follows the file extension:
//! `.yaml`/`.yml` for YAML, anything else for JSON.
//!
//! YAML input is lowered into the JSON data model before validation. Values
//! JSON cannot hold (`.nan`, `.inf`, sequence or mapping keys) are rejected
//! with the dotted location where they appear.

use std::path::Path;

use anyhow::{anyhow, Context};
use serde_json::Value;
use serde_yaml::Value as Yaml;

/// Read a JSON or YAML document from disk.
pub fn load_document(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read document '{}'", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => {
            let yaml: Yaml = serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML in '{}'", path.display()))?;
            lower(yaml, "")
                .with_context(|| format!("cannot convert '{}' to JSON", path.display()))
        }
        _ => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in '{}'", path.display())),
    }
}

/// Lower a YAML tree found at `at` into a JSON tree. Tags are dropped.
fn lower(yaml: Yaml, at: &str) -> anyhow::Result<Value> {
    let value = match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => number(&n)
            .ok_or_else(|| anyhow!("{}: {n} has no JSON representation", location(at)))?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| lower(item, &format!("{at}[{i}]")))
                .collect::<anyhow::Result<_>>()?,
        ),
        Yaml::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, item) in map {
                let key = scalar_key(key)
                    .with_context(|| format!("{}: map keys must be scalars", location(at)))?;
                let child = if at.is_empty() {
                    key.clone()
                } else {
                    format!("{at}.{key}")
                };
                object.insert(key, lower(item, &child)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => lower(tagged.value, at)?,
    };
    Ok(value)
}

/// Integers keep their exact value; floats must be finite.
fn number(n: &serde_yaml::Number) -> Option<Value> {
    if let Some(i) = n.as_i64() {
        Some(Value::from(i))
    } else if let Some(u) = n.as_u64() {
        Some(Value::from(u))
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
    }
}

fn scalar_key(key: Yaml) -> Option<String> {
    match key {
        Yaml::String(s) => Some(s),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Tagged(tagged) => scalar_key(tagged.value),
        Yaml::Null | Yaml::Sequence(_) | Yaml::Mapping(_) => None,
    }
}

fn location(at: &str) -> &str {
    if at.is_empty() {
        "document root"
    } else {
        at
    }
}
