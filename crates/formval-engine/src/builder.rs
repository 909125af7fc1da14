//! # Configuration Builder
//!
//! Fluent construction of a [`ValidationConfig`], one field at a time:
//!
//! ```
//! use formval_engine::ValidationBuilder;
//! use serde_json::json;
//!
//! let rules = ValidationBuilder::new()
//!     .add_field("username", |f| {
//!         f.make_required("You must have a username!")
//!             .add_type_check(|v| !v.is_some_and(|v| v.is_string()), "Invalid username provided!")
//!             .add_validator(
//!                 |v| v.and_then(|v| v.as_str()).is_some_and(|s| s.chars().count() > 50),
//!                 "Your username cannot exceed 50 characters!",
//!             )
//!     });
//!
//! let bag = rules.validate(&json!({ "username": "Command_String" })).unwrap();
//! assert!(!bag.has_errors());
//! ```
//!
//! Builders only accumulate. Nothing is checked until the configuration is
//! validated against, where malformed rules surface as a
//! [`ConfigError`](formval_core::ConfigError).

use formval_core::{ConfigError, ErrorBag, FieldConfig, ValidationConfig, Validator};
use serde_json::Value;

use crate::engine;

/// Accumulates the rules for one field.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    config: FieldConfig,
}

impl FieldBuilder {
    /// Start an empty field configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: FieldConfig::default(),
        }
    }

    /// The field this builder configures.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the type check, replacing any previous one.
    pub fn add_type_check<F>(mut self, is_invalid: F, message: impl Into<String>) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.config.type_check = Some(Validator::new(is_invalid, message));
        self
    }

    /// Report `message` when the field is absent.
    pub fn make_required(mut self, message: impl Into<String>) -> Self {
        self.config.required = true;
        self.config.required_message = Some(message.into());
        self
    }

    /// Stop at this field's first failing check.
    pub fn stop_after_first_fail(mut self, stop: bool) -> Self {
        self.config.stop_after_first_fail = stop;
        self
    }

    /// Append a validator. Validators run in the order they are added.
    pub fn add_validator<F>(mut self, is_invalid: F, message: impl Into<String>) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.config.validators.push(Validator::new(is_invalid, message));
        self
    }

    /// Append a prebuilt validator, e.g. one from `formval-rules`.
    pub fn add(mut self, validator: Validator) -> Self {
        self.config.validators.push(validator);
        self
    }

    /// Validate the field's value as an object with its own rules.
    ///
    /// Accepts a [`ValidationConfig`] or another [`ValidationBuilder`].
    pub fn add_nested_config(mut self, nested: impl Into<ValidationConfig>) -> Self {
        self.config.nested = Some(Box::new(nested.into()));
        self
    }

    /// The rules accumulated so far.
    pub fn field_config(&self) -> &FieldConfig {
        &self.config
    }

    /// Finish and return the field configuration.
    pub fn build(self) -> FieldConfig {
        self.config
    }
}

/// Accumulates a [`ValidationConfig`] field by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationBuilder {
    config: ValidationConfig,
}

impl ValidationBuilder {
    /// Start an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop validating further fields once one field has failed.
    pub fn stop_after_first_fail(mut self, stop: bool) -> Self {
        self.config.stop_after_first_fail = stop;
        self
    }

    /// Configure a field through a fresh [`FieldBuilder`].
    ///
    /// Adding the same name twice replaces the earlier rules but keeps the
    /// field's original evaluation position.
    pub fn add_field<F>(mut self, name: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(FieldBuilder) -> FieldBuilder,
    {
        let name = name.into();
        let field = build(FieldBuilder::new(name.clone())).build();
        self.config.fields.insert(name, field);
        self
    }

    /// The configuration accumulated so far.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Finish and return the configuration.
    pub fn build(self) -> ValidationConfig {
        self.config
    }

    /// Validate `object` against the accumulated configuration.
    ///
    /// # Errors
    ///
    /// See [`engine::validate`].
    pub fn validate(&self, object: &Value) -> Result<ErrorBag, ConfigError> {
        engine::validate(object, &self.config)
    }
}

impl From<ValidationBuilder> for ValidationConfig {
    fn from(builder: ValidationBuilder) -> Self {
        builder.build()
    }
}
