//! # Validation Configuration
//!
//! The configuration tree consumed by the validation engine. A
//! [`ValidationConfig`] maps field names to [`FieldConfig`]s, and a field
//! may carry a nested [`ValidationConfig`] for the object stored under it.
//!
//! Configurations can be written out directly as struct literals, built
//! with the fluent builder in `formval-engine`, or compiled from a rule
//! document by `formval-rules`. None of these paths check the result:
//! malformed configurations are only rejected when validation runs.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

/// A check over a field value. Returns `true` when the value is INVALID.
///
/// The argument is `None` when the object has no entry for the field.
pub type Predicate = Arc<dyn Fn(Option<&Value>) -> bool + Send + Sync>;

/// A named check: an invalidity predicate and the message recorded when it
/// fires.
#[derive(Clone)]
pub struct Validator {
    /// Returns `true` when the value should be reported.
    pub is_invalid: Predicate,
    /// Message recorded in the error bag. Must be non-empty.
    pub message: String,
}

impl Validator {
    /// Create a validator from a predicate closure and its message.
    pub fn new<F>(is_invalid: F, message: impl Into<String>) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self {
            is_invalid: Arc::new(is_invalid),
            message: message.into(),
        }
    }

    /// Create a validator from an already shared predicate.
    pub fn from_predicate(is_invalid: Predicate, message: impl Into<String>) -> Self {
        Self {
            is_invalid,
            message: message.into(),
        }
    }

    /// Run the predicate against a field value.
    pub fn check(&self, value: Option<&Value>) -> bool {
        (self.is_invalid)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Validation rules for a single named field.
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    /// Shape check run before validators and nested rules.
    pub type_check: Option<Validator>,
    /// Whether an absent entry is reported.
    pub required: bool,
    /// Message recorded for an absent required field.
    pub required_message: Option<String>,
    /// Value checks, run in order. Empty means none are configured.
    pub validators: Vec<Validator>,
    /// Rules for the sub-object stored under this field.
    pub nested: Option<Box<ValidationConfig>>,
    /// Stop at this field's first failure.
    pub stop_after_first_fail: bool,
}

impl FieldConfig {
    /// Returns true if the field has validators or a nested configuration.
    pub fn has_rules(&self) -> bool {
        !self.validators.is_empty() || self.nested.is_some()
    }
}

/// Validation rules for an object, keyed by field name.
///
/// Fields are evaluated in insertion order, which decides what runs before
/// an early stop.
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Stop validating further fields once one field has failed.
    pub stop_after_first_fail: bool,
    /// Per-field rules in declaration order.
    pub fields: IndexMap<String, FieldConfig>,
}

impl ValidationConfig {
    /// An empty configuration that accepts every object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the rules for a field.
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.get(name)
    }

    /// Field names in evaluation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
