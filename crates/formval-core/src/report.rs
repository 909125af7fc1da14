//! # Error Report
//!
//! The result of a validation run. An [`ErrorBag`] maps field names to
//! [`FieldErrors`] and tracks whether anything was recorded at any depth.
//!
//! ## Wire Shape
//!
//! Consumers (typically form UIs) read the serialized report:
//!
//! ```json
//! {
//!   "errors": {
//!     "username": ["Your username cannot exceed 50 characters!"],
//!     "settings": {
//!       "color": ["Color must be red, blue or green!"],
//!       "errors": ["Missing settings!"]
//!     }
//!   },
//!   "hasErrors": true
//! }
//! ```
//!
//! A nested entry carries the child field errors under their own names and
//! the parent field's direct messages under the reserved
//! [`RESERVED_ERRORS_KEY`]. In memory the two are separate
//! ([`FieldErrors::Nested`]); they are only merged into one JSON object by
//! the `Serialize` impl.

use indexmap::IndexMap;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Key under which a nested entry's own messages are serialized.
pub const RESERVED_ERRORS_KEY: &str = "errors";

/// Errors recorded for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrors {
    /// Direct messages about the field's value, in recording order.
    Messages(Vec<String>),
    /// Errors from the field's nested configuration.
    Nested {
        /// Child field errors.
        fields: ValidationErrors,
        /// Direct messages about the field's value as a whole.
        errors: Vec<String>,
    },
}

impl FieldErrors {
    /// Direct messages for this field. For a nested entry these are the
    /// messages stored under the reserved key.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Messages(messages) => messages,
            Self::Nested { errors, .. } => errors,
        }
    }

    /// Errors for a child field of a nested entry.
    pub fn child(&self, name: &str) -> Option<&FieldErrors> {
        match self {
            Self::Messages(_) => None,
            Self::Nested { fields, .. } => fields.get(name),
        }
    }

    /// Returns true for a nested entry.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested { .. })
    }

    /// Total number of messages in this entry, children included.
    pub fn message_count(&self) -> usize {
        match self {
            Self::Messages(messages) => messages.len(),
            Self::Nested { fields, errors } => errors.len() + fields.message_count(),
        }
    }

    fn push(&mut self, message: String) {
        match self {
            Self::Messages(messages) => messages.push(message),
            Self::Nested { errors, .. } => errors.push(message),
        }
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Messages(messages) => {
                let mut seq = serializer.serialize_seq(Some(messages.len()))?;
                for message in messages {
                    seq.serialize_element(message)?;
                }
                seq.end()
            }
            Self::Nested { fields, errors } => {
                if !errors.is_empty() && fields.contains(RESERVED_ERRORS_KEY) {
                    return Err(S::Error::custom(format!(
                        "field name '{RESERVED_ERRORS_KEY}' is reserved when a nested \
                         field also has direct errors"
                    )));
                }
                let own = usize::from(!errors.is_empty());
                let mut map = serializer.serialize_map(Some(fields.len() + own))?;
                for (name, entry) in fields.iter() {
                    map.serialize_entry(name, entry)?;
                }
                if !errors.is_empty() {
                    map.serialize_entry(RESERVED_ERRORS_KEY, errors)?;
                }
                map.end()
            }
        }
    }
}

/// Field name to recorded errors, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<String, FieldErrors>);

impl ValidationErrors {
    /// Errors recorded for a field.
    pub fn get(&self, field: &str) -> Option<&FieldErrors> {
        self.0.get(field)
    }

    /// Returns true if the field has an entry.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields with an entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field has an entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldErrors)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of messages at every depth.
    pub fn message_count(&self) -> usize {
        self.0.values().map(FieldErrors::message_count).sum()
    }
}

/// The outcome of validating one object.
///
/// `has_errors` is the single flag a caller should branch on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBag {
    errors: ValidationErrors,
    has_errors: bool,
}

impl ErrorBag {
    /// An empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any message was recorded at any depth.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// The recorded errors.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Errors recorded for a top-level field.
    pub fn field(&self, name: &str) -> Option<&FieldErrors> {
        self.errors.get(name)
    }

    /// Total number of messages at every depth.
    pub fn message_count(&self) -> usize {
        self.errors.message_count()
    }

    /// Record a direct message for a field.
    ///
    /// A field with no entry gets a new message list. A field that already
    /// holds nested errors keeps them; the message goes to the entry's own
    /// list instead.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.errors.0.get_mut(field) {
            Some(entry) => entry.push(message),
            None => {
                self.errors
                    .0
                    .insert(field.to_string(), FieldErrors::Messages(vec![message]));
            }
        }
        self.has_errors = true;
    }

    /// Store the result of validating a field's nested configuration.
    ///
    /// Replaces any entry previously recorded for the field. Nothing is
    /// stored for a child bag without errors.
    pub fn nest(&mut self, field: &str, child: ErrorBag) {
        if !child.has_errors {
            return;
        }
        self.errors.0.insert(
            field.to_string(),
            FieldErrors::Nested {
                fields: child.errors,
                errors: Vec::new(),
            },
        );
        self.has_errors = true;
    }
}
