//! # Validation Engine
//!
//! Walks a [`ValidationConfig`] alongside a JSON object and records every
//! failed rule in an [`ErrorBag`].
//!
//! ## Per-Field Order
//!
//! 1. Required check. An absent required field records its message and
//!    skips every other rule for that field.
//! 2. Type check. A failure records its message and skips the field's
//!    validators and nested rules.
//! 3. Nested configuration, recursively. Child errors are stored under the
//!    field name.
//! 4. Validators, in declaration order. Messages for a field that already
//!    holds nested errors go to that entry's own list.
//!
//! Nested rules run before validators so that a field failing both always
//! ends up as one nested entry carrying its own messages.
//!
//! ## Early Stops
//!
//! - `ValidationConfig::stop_after_first_fail` ends the walk after a field
//!   whose required check or nested rules failed.
//! - `FieldConfig::stop_after_first_fail` keeps only the first failing
//!   validator of that field. A failing type check on such a field ends the
//!   whole walk.
//!
//! ## Configuration Errors
//!
//! Incomplete rules abort the call with a [`ConfigError`] instead of being
//! reported as validation messages. Each rule is checked when the walk
//! reaches it, so a configuration error behind an early stop goes
//! unnoticed.

use formval_core::{ConfigError, ErrorBag, FieldConfig, ValidationConfig};
use serde_json::Value;

/// Validate `object` against `config`.
///
/// Fields of a non-object value are treated as absent.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the walk reaches a rule that cannot be
/// evaluated: a required field or type check without a message, a field
/// with neither validators nor a nested configuration, or a validator
/// without a message.
pub fn validate(object: &Value, config: &ValidationConfig) -> Result<ErrorBag, ConfigError> {
    validate_entry(Some(object), config)
}

fn validate_entry(
    object: Option<&Value>,
    config: &ValidationConfig,
) -> Result<ErrorBag, ConfigError> {
    let mut bag = ErrorBag::new();

    for (field, rules) in &config.fields {
        let value = object.and_then(|o| o.get(field.as_str()));

        if rules.required && value.is_none() {
            let message = required_message(field, rules)?;
            record(&mut bag, field, message);
            if config.stop_after_first_fail {
                tracing::debug!(field = %field, "required field missing, stopping");
                break;
            }
            continue;
        }

        if let Some(type_check) = &rules.type_check {
            if type_check.message.is_empty() {
                return Err(malformed(ConfigError::MissingTypeMessage {
                    field: field.clone(),
                }));
            }
            if type_check.check(value) {
                record(&mut bag, field, &type_check.message);
                if rules.stop_after_first_fail {
                    tracing::debug!(field = %field, "type check failed, stopping");
                    break;
                }
                continue;
            }
        }

        if !rules.has_rules() {
            return Err(malformed(ConfigError::NoRules {
                field: field.clone(),
            }));
        }

        if let Some(nested) = &rules.nested {
            let child = validate_entry(value, nested)?;
            let failed = child.has_errors();
            bag.nest(field, child);
            if failed && config.stop_after_first_fail {
                tracing::debug!(field = %field, "nested validation failed, stopping");
                break;
            }
        }

        for (index, validator) in rules.validators.iter().enumerate() {
            if validator.message.is_empty() {
                return Err(malformed(ConfigError::MissingValidatorMessage {
                    field: field.clone(),
                    index,
                }));
            }
            if validator.check(value) {
                record(&mut bag, field, &validator.message);
                if rules.stop_after_first_fail {
                    break;
                }
            }
        }
    }

    Ok(bag)
}

fn required_message<'a>(field: &str, rules: &'a FieldConfig) -> Result<&'a str, ConfigError> {
    match rules.required_message.as_deref() {
        Some(message) if !message.is_empty() => Ok(message),
        _ => Err(malformed(ConfigError::MissingRequiredMessage {
            field: field.to_string(),
        })),
    }
}

fn record(bag: &mut ErrorBag, field: &str, message: &str) {
    tracing::trace!(field = %field, "check failed");
    bag.push(field, message);
}

fn malformed(err: ConfigError) -> ConfigError {
    tracing::debug!(error = %err, "malformed validation config");
    err
}
