//! # Rule Documents
//!
//! Declarative validation rules in YAML or JSON:
//!
//! ```yaml
//! stop_after_first_fail: false
//! fields:
//!   username:
//!     required: true
//!     required_message: You must have a username!
//!     type: { kind: string, message: Invalid username provided! }
//!     validators:
//!       - { max_length: 50, message: Your username cannot exceed 50 characters! }
//!       - { pattern: "(?i)^[a-z_1-9]+$", message: "Letters, underscores, and numbers only!" }
//!   settings:
//!     nested:
//!       fields:
//!         color:
//!           validators:
//!             - { one_of: [red, blue, green], message: "Color must be red, blue or green!" }
//! ```
//!
//! A document maps one-to-one onto a
//! [`ValidationConfig`](formval_core::ValidationConfig). Compilation only
//! turns rules into predicates; a field without validators or a required
//! field without a message is left for the engine to reject.

use std::path::Path;

use formval_core::{FieldConfig, ValidationConfig, Validator};
use indexmap::IndexMap;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::predicates::{self, ValueKind};

/// Error while loading or compiling a rule document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("document load error for '{path}': {reason}")]
    Load {
        /// Path to the document.
        path: String,
        /// Reason the document could not be read.
        reason: String,
    },

    /// The document is not valid YAML or does not fit the rule format.
    #[error("invalid YAML rule document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON or does not fit the rule format.
    #[error("invalid JSON rule document: {0}")]
    Json(#[from] serde_json::Error),

    /// A `pattern` rule does not compile.
    #[error("invalid pattern '{pattern}' for {field}: {reason}")]
    InvalidPattern {
        /// Dotted path of the field declaring the rule.
        field: String,
        /// The pattern as written.
        pattern: String,
        /// Regex compilation error.
        reason: String,
    },
}

/// Rules for an object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDocument {
    /// Stop validating further fields once one field has failed.
    #[serde(default)]
    pub stop_after_first_fail: bool,
    /// Per-field rules, in evaluation order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldRules>,
}

/// Rules for one field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldRules {
    /// Report the field when it is absent.
    #[serde(default)]
    pub required: bool,
    /// Message recorded when a required field is absent.
    #[serde(default)]
    pub required_message: Option<String>,
    /// Written as `type` in documents.
    #[serde(default, rename = "type")]
    pub type_check: Option<TypeRule>,
    /// Stop at this field's first failing check.
    #[serde(default)]
    pub stop_after_first_fail: bool,
    /// Validators, run in the order written.
    #[serde(default)]
    pub validators: Vec<RuleSpec>,
    /// Rules for the field's value as an object.
    #[serde(default)]
    pub nested: Option<RuleDocument>,
}

/// Type check: the value must be of `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeRule {
    /// Expected JSON kind.
    pub kind: ValueKind,
    /// Recorded when the value is of another kind.
    pub message: String,
}

/// A validator entry: exactly one rule key plus `message`.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    /// The rule, written as its own key (`max_length: 50`).
    pub rule: Rule,
    /// Recorded when the rule fails.
    pub message: String,
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entry: serde_json::Map<String, Value> = Deserialize::deserialize(deserializer)?;
        let message = match entry.remove("message") {
            Some(Value::String(message)) => message,
            Some(_) => return Err(D::Error::custom("validator message must be a string")),
            None => return Err(D::Error::missing_field("message")),
        };
        if entry.len() != 1 {
            let keys: Vec<&str> = entry.keys().map(String::as_str).collect();
            return Err(D::Error::custom(format!(
                "validator entry needs exactly one rule besides `message`, found [{}]",
                keys.join(", ")
            )));
        }
        let rule = Rule::deserialize(Value::Object(entry)).map_err(D::Error::custom)?;
        Ok(Self { rule, message })
    }
}

/// Stock rule kinds available in documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// String or array length at most this.
    MaxLength(usize),
    /// String or array length at least this.
    MinLength(usize),
    /// String matching this regex.
    Pattern(String),
    /// One of these values.
    OneOf(Vec<Value>),
    /// Number at most this.
    Max(f64),
    /// Number at least this.
    Min(f64),
    /// Object with exactly this many keys.
    KeyCount(usize),
}

impl Rule {
    fn compile(&self, field: &str, message: &str) -> Result<Validator, DocumentError> {
        let predicate = match self {
            Self::MaxLength(max) => predicates::longer_than(*max),
            Self::MinLength(min) => predicates::shorter_than(*min),
            Self::Pattern(pattern) => {
                let regex = Regex::new(pattern).map_err(|e| DocumentError::InvalidPattern {
                    field: field.to_string(),
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
                predicates::not_matching(regex)
            }
            Self::OneOf(allowed) => predicates::not_one_of(allowed.clone()),
            Self::Max(max) => predicates::above(*max),
            Self::Min(min) => predicates::below(*min),
            Self::KeyCount(count) => predicates::key_count_not(*count),
        };
        Ok(Validator::from_predicate(predicate, message))
    }
}

impl RuleDocument {
    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a document from disk.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, everything else as JSON.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Load {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    /// Turn the document into a validation configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidPattern`] for a pattern that does
    /// not compile, naming the dotted field path.
    pub fn compile(&self) -> Result<ValidationConfig, DocumentError> {
        let config = self.compile_at("")?;
        tracing::debug!(fields = config.fields.len(), "compiled rule document");
        Ok(config)
    }

    fn compile_at(&self, prefix: &str) -> Result<ValidationConfig, DocumentError> {
        let mut fields = IndexMap::with_capacity(self.fields.len());
        for (name, rules) in &self.fields {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            fields.insert(name.clone(), rules.compile_at(&path)?);
        }
        Ok(ValidationConfig {
            stop_after_first_fail: self.stop_after_first_fail,
            fields,
        })
    }
}

impl FieldRules {
    fn compile_at(&self, path: &str) -> Result<FieldConfig, DocumentError> {
        let type_check = self.type_check.as_ref().map(|t| {
            Validator::from_predicate(predicates::not_kind(t.kind), t.message.as_str())
        });

        let validators = self
            .validators
            .iter()
            .map(|entry| entry.rule.compile(path, &entry.message))
            .collect::<Result<Vec<_>, _>>()?;

        let nested = match &self.nested {
            Some(doc) => Some(Box::new(doc.compile_at(path)?)),
            None => None,
        };

        Ok(FieldConfig {
            type_check,
            required: self.required,
            required_message: self.required_message.clone(),
            validators,
            nested,
            stop_after_first_fail: self.stop_after_first_fail,
        })
    }
}

/// Load a rule document from disk and compile it.
pub fn load_config(path: impl AsRef<Path>) -> Result<ValidationConfig, DocumentError> {
    RuleDocument::load(path.as_ref())?.compile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SETTINGS: &str = r#"
stop_after_first_fail: true
fields:
  settings:
    type: { kind: object, message: Invalid settings provided! }
    stop_after_first_fail: true
    nested:
      fields:
        color:
          required: true
          required_message: Color setting is missing!
          validators:
            - { one_of: [red, blue, green], message: "Color must be red, blue or green!" }
        theme:
          validators:
            - { pattern: "^(light|dark)$", message: Theme must be light or dark! }
    validators:
      - { key_count: 3, message: Missing settings! }
"#;

    #[test]
    fn parses_every_section() {
        let doc = RuleDocument::from_yaml_str(SETTINGS).unwrap();
        assert!(doc.stop_after_first_fail);
        let settings = &doc.fields["settings"];
        assert!(settings.stop_after_first_fail);
        assert_eq!(settings.type_check.as_ref().unwrap().kind, ValueKind::Object);
        assert_eq!(settings.validators[0].rule, Rule::KeyCount(3));
        assert_eq!(settings.validators[0].message, "Missing settings!");

        let nested = settings.nested.as_ref().unwrap();
        let names: Vec<&str> = nested.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["color", "theme"]);
        assert_eq!(
            nested.fields["color"].validators[0].rule,
            Rule::OneOf(vec![json!("red"), json!("blue"), json!("green")])
        );
    }

    #[test]
    fn compiles_to_matching_config() {
        let config = RuleDocument::from_yaml_str(SETTINGS).unwrap().compile().unwrap();
        assert!(config.stop_after_first_fail);
        let settings = config.field("settings").unwrap();
        assert!(settings.type_check.is_some());
        assert_eq!(settings.validators.len(), 1);

        let nested = settings.nested.as_ref().unwrap();
        let color = nested.field("color").unwrap();
        assert!(color.required);
        assert_eq!(
            color.required_message.as_deref(),
            Some("Color setting is missing!")
        );
        assert!(color.validators[0].check(Some(&json!("orange"))));
        assert!(!color.validators[0].check(Some(&json!("red"))));
    }

    #[test]
    fn json_documents_parse_the_same() {
        let doc = RuleDocument::from_json_str(
            r#"{
                "fields": {
                    "age": {
                        "type": { "kind": "integer", "message": "Age must be a whole number!" },
                        "validators": [ { "min": 0, "message": "Age cannot be negative!" } ]
                    }
                }
            }"#,
        )
        .unwrap();
        let age = &doc.fields["age"];
        assert_eq!(age.validators[0].rule, Rule::Min(0.0));
        assert!(!doc.stop_after_first_fail);
    }

    #[test]
    fn unknown_field_keys_are_rejected() {
        let err = RuleDocument::from_yaml_str(
            "fields:\n  name:\n    requried: true\n    validators: []\n",
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::Yaml(_)));
    }

    #[test]
    fn unknown_rule_kind_is_rejected() {
        let err = RuleDocument::from_yaml_str(
            "fields:\n  name:\n    validators:\n      - { shouting: true, message: nope }\n",
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::Yaml(_)));
    }

    #[test]
    fn extra_key_in_validator_entry_is_rejected() {
        let err = RuleDocument::from_yaml_str(
            "fields:\n  name:\n    validators:\n      - { max_length: 5, message: too long, bogus: 1 }\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("bogus"), "got: {err}");
    }

    #[test]
    fn two_rules_in_one_entry_are_rejected() {
        let err = RuleDocument::from_yaml_str(
            "fields:\n  name:\n    validators:\n      - { max_length: 5, min_length: 2, message: bad }\n",
        )
        .unwrap_err();
        let text = err.to_string();
        assert!(matches!(err, DocumentError::Yaml(_)));
        assert!(text.contains("max_length") && text.contains("min_length"), "got: {text}");
    }

    #[test]
    fn validator_entry_needs_a_message() {
        let err = RuleDocument::from_json_str(
            r#"{ "fields": { "name": { "validators": [ { "max_length": 5 } ] } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
        assert!(err.to_string().contains("message"), "got: {err}");
    }

    #[test]
    fn bad_pattern_names_the_field_path() {
        let doc = RuleDocument::from_yaml_str(
            "fields:\n  settings:\n    nested:\n      fields:\n        theme:\n          validators:\n            - { pattern: \"(unclosed\", message: bad }\n",
        )
        .unwrap();
        match doc.compile().unwrap_err() {
            DocumentError::InvalidPattern { field, pattern, .. } => {
                assert_eq!(field, "settings.theme");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("Expected InvalidPattern, got: {other}"),
        }
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_config("/nonexistent/rules.yaml").unwrap_err();
        assert!(
            matches!(err, DocumentError::Load { .. }),
            "Expected Load, got: {err}"
        );
    }
}
