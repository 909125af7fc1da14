//! # Check Subcommand
//!
//! Validates one document against a rule file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use formval_core::ErrorBag;

use crate::input::load_document;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Rule document (YAML or JSON).
    #[arg(long)]
    pub rules: PathBuf,

    /// Document to validate (YAML or JSON).
    pub document: PathBuf,

    /// Pretty-print the error bag.
    #[arg(long)]
    pub pretty: bool,
}

/// Load the rules and the document, then validate.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<ErrorBag> {
    let config = formval_rules::load_config(&args.rules)
        .with_context(|| format!("cannot load rules from '{}'", args.rules.display()))?;
    let document = load_document(&args.document)?;

    let bag = formval_engine::validate(&document, &config).context("rule document is malformed")?;
    tracing::info!(
        document = %args.document.display(),
        has_errors = bag.has_errors(),
        messages = bag.message_count(),
        "validated document"
    );
    Ok(bag)
}

/// Serialize the error bag for stdout.
pub fn render(bag: &ErrorBag, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(bag)
    } else {
        serde_json::to_string(bag)
    };
    out.context("cannot serialize error bag")
}
