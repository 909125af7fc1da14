//! # formval-engine — Recursive Object Validation
//!
//! Validates a `serde_json::Value` object against a
//! [`ValidationConfig`](formval_core::ValidationConfig) and reports every
//! failed rule in an [`ErrorBag`](formval_core::ErrorBag).
//!
//! ## Validation (`engine`)
//!
//! [`validate`] is a pure function: it never mutates its input, holds no
//! state between calls, and returns a fresh bag each time. Input problems
//! are recorded in the bag; configuration problems abort the call with a
//! [`ConfigError`](formval_core::ConfigError).
//!
//! ## Building Configurations (`builder`)
//!
//! [`ValidationBuilder`] and [`FieldBuilder`] assemble the same
//! configuration values with chained calls, including nested
//! configurations built from other builders.
//!
//! ## Crate Policy
//!
//! - Depends only on `formval-core` internally.
//! - No I/O. Predicates are called synchronously and a panic inside one
//!   propagates to the caller unchanged.

pub mod builder;
pub mod engine;

pub use builder::{FieldBuilder, ValidationBuilder};
pub use engine::validate;
pub use formval_core::{
    ConfigError, ErrorBag, FieldConfig, FieldErrors, ValidationConfig, ValidationErrors, Validator,
};
