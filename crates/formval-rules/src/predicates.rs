//! # Stock Predicates
//!
//! Each constructor returns a [`Predicate`] that is `true` for an INVALID
//! value, ready to pair with a message in a
//! [`Validator`](formval_core::Validator).
//!
//! All of them return `false` for an absent value. A present value of the
//! wrong JSON kind fails every bound check (a number has no length, a
//! string is not below 10).

use std::fmt;
use std::sync::Arc;

use formval_core::Predicate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON value kinds a type check can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Any string.
    String,
    /// Any number, integral or not.
    Number,
    /// A number with no fractional part that fits in `i64` or `u64`.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// A JSON object.
    Object,
    /// A JSON array.
    Array,
    /// `null`.
    Null,
}

impl ValueKind {
    /// Returns true if `value` is of this kind.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::Null => value.is_null(),
        }
    }

    /// Lowercase name used in rule documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap a check over present values. Absent values always pass.
fn present(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Predicate {
    Arc::new(move |value: Option<&Value>| value.is_some_and(&check))
}

/// Character count of a string, or element count of an array.
fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Invalid unless the value is of `kind`.
pub fn not_kind(kind: ValueKind) -> Predicate {
    present(move |v| !kind.matches(v))
}

/// Invalid if a string or array is longer than `max`.
pub fn longer_than(max: usize) -> Predicate {
    present(move |v| length(v).map_or(true, |len| len > max))
}

/// Invalid if a string or array is shorter than `min`.
pub fn shorter_than(min: usize) -> Predicate {
    present(move |v| length(v).map_or(true, |len| len < min))
}

/// Invalid if a string does not match `pattern`.
pub fn not_matching(pattern: Regex) -> Predicate {
    present(move |v| v.as_str().map_or(true, |s| !pattern.is_match(s)))
}

/// Invalid if the value is not one of `allowed`.
pub fn not_one_of(allowed: Vec<Value>) -> Predicate {
    present(move |v| !allowed.contains(v))
}

/// Invalid if a number is greater than `max`.
pub fn above(max: f64) -> Predicate {
    present(move |v| v.as_f64().map_or(true, |n| n > max))
}

/// Invalid if a number is less than `min`.
pub fn below(min: f64) -> Predicate {
    present(move |v| v.as_f64().map_or(true, |n| n < min))
}

/// Invalid if an object does not have exactly `count` keys.
pub fn key_count_not(count: usize) -> Predicate {
    present(move |v| v.as_object().map_or(true, |o| o.len() != count))
}
