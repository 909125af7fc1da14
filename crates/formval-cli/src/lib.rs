//! # formval-cli — Command-Line Interface
//!
//! Thin clap front end over the formval crates.
//!
//! ## Subcommands
//!
//! - `check` — validate a JSON or YAML document against a rule document
//!   and print the error bag as JSON
//! - `rules` — print the field tree of a compiled rule document
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `formval-rules` and `formval-engine`; no
//!   validation logic lives here.

pub mod check;
pub mod input;
pub mod rules;
