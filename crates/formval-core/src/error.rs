//! # Configuration Errors
//!
//! Validation failures are data and end up in the [`ErrorBag`]. A
//! malformed configuration is a programmer error instead: the engine
//! aborts the current call and returns one of these.
//!
//! [`ErrorBag`]: crate::ErrorBag

use thiserror::Error;

/// A configuration that cannot be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field has no message to report when it is absent.
    #[error("{field} is missing required error message")]
    MissingRequiredMessage {
        /// Field whose configuration is incomplete.
        field: String,
    },

    /// A type check has an empty message.
    #[error("{field} is missing type error message")]
    MissingTypeMessage {
        /// Field whose configuration is incomplete.
        field: String,
    },

    /// A field configures neither validators nor a nested configuration.
    #[error("you must provide either validators or a nested validation config for {field}")]
    NoRules {
        /// Field whose configuration is incomplete.
        field: String,
    },

    /// A validator has an empty message.
    #[error("validator #{index} for {field} is missing its error message")]
    MissingValidatorMessage {
        /// Field whose configuration is incomplete.
        field: String,
        /// Position of the validator in the field's list.
        index: usize,
    },
}

impl ConfigError {
    /// The field whose configuration triggered the error.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredMessage { field }
            | Self::MissingTypeMessage { field }
            | Self::NoRules { field }
            | Self::MissingValidatorMessage { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = ConfigError::MissingRequiredMessage {
            field: "username".to_string(),
        };
        assert_eq!(err.to_string(), "username is missing required error message");
        assert_eq!(err.field(), "username");
    }

    #[test]
    fn validator_message_error_reports_position() {
        let err = ConfigError::MissingValidatorMessage {
            field: "avatar".to_string(),
            index: 2,
        };
        assert!(err.to_string().contains("#2"));
        assert_eq!(err.field(), "avatar");
    }
}
