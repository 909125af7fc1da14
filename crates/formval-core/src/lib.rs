//! # formval-core — Validation Data Model
//!
//! Defines the values that flow through every other crate in the
//! workspace: the configuration tree a caller describes, and the error
//! report validation hands back. This crate contains no validation logic;
//! the walk itself lives in `formval-engine`.
//!
//! ## Key Design Principles
//!
//! 1. **Predicates are plain function values.** A [`Validator`] pairs an
//!    `Arc<dyn Fn>` returning `true` for an INVALID value with the message
//!    to record. Configurations are therefore `Clone + Send + Sync`.
//!
//! 2. **Recursive configuration.** A [`FieldConfig`] may own a boxed
//!    [`ValidationConfig`] for the sub-object stored under that field.
//!
//! 3. **Tagged error entries.** [`FieldErrors`] is either a list of
//!    messages or a nested error map with the field's own messages kept
//!    alongside. The reserved `"errors"` key only exists at the serde edge.
//!
//! 4. **Declaration order is evaluation order.** Field maps are
//!    [`indexmap::IndexMap`]s so early-stop behavior is deterministic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formval-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod report;

pub use config::{FieldConfig, Predicate, ValidationConfig, Validator};
pub use error::ConfigError;
pub use report::{ErrorBag, FieldErrors, ValidationErrors, RESERVED_ERRORS_KEY};
