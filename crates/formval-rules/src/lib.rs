//! # formval-rules — Stock Rules & Rule Documents
//!
//! Two ways to get a [`ValidationConfig`](formval_core::ValidationConfig)
//! without writing predicate closures by hand.
//!
//! ## Stock Predicates (`predicates`)
//!
//! Constructors for the checks most forms need: JSON kind, length bounds,
//! regex patterns, allowed values, numeric bounds, and object key counts.
//! Every stock predicate passes over an absent value; presence is the
//! required check's job.
//!
//! ## Rule Documents (`document`)
//!
//! A YAML or JSON file describing fields, their required messages, type
//! checks, validators, and nested rules. [`load_config`] reads one from
//! disk and compiles it. Field order in the file is evaluation order.
//!
//! ## Crate Policy
//!
//! - Depends only on `formval-core` internally.
//! - Loading never validates the rules themselves beyond parsing and regex
//!   compilation; incomplete rules are reported by the engine.

pub mod document;
pub mod predicates;

pub use document::{load_config, DocumentError, FieldRules, Rule, RuleDocument, RuleSpec, TypeRule};
pub use predicates::ValueKind;
