//! # Rules Subcommand
//!
//! Prints the field tree of a compiled rule document, one field per line
//! in evaluation order.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use formval_core::ValidationConfig;

/// Arguments for the rules subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Rule document (YAML or JSON).
    #[arg(long)]
    pub rules: PathBuf,
}

/// Load a rule document and describe it.
pub fn run_rules(args: &RulesArgs) -> anyhow::Result<String> {
    let config = formval_rules::load_config(&args.rules)
        .with_context(|| format!("cannot load rules from '{}'", args.rules.display()))?;
    Ok(describe(&config))
}

/// Render a configuration as an indented field tree.
pub fn describe(config: &ValidationConfig) -> String {
    let mut out = String::new();
    if config.stop_after_first_fail {
        out.push_str("(stops after first failed field)\n");
    }
    describe_into(&mut out, config, 0);
    out
}

fn describe_into(out: &mut String, config: &ValidationConfig, depth: usize) {
    for (name, field) in &config.fields {
        let mut notes = Vec::new();
        if field.required {
            notes.push("required".to_string());
        }
        if field.type_check.is_some() {
            notes.push("type".to_string());
        }
        match field.validators.len() {
            0 => {}
            1 => notes.push("1 validator".to_string()),
            n => notes.push(format!("{n} validators")),
        }
        if field.stop_after_first_fail {
            notes.push("stop after first fail".to_string());
        }

        let indent = "  ".repeat(depth);
        if notes.is_empty() {
            let _ = writeln!(out, "{indent}{name}");
        } else {
            let _ = writeln!(out, "{indent}{name} ({})", notes.join(", "));
        }

        if let Some(nested) = &field.nested {
            describe_into(out, nested, depth + 1);
        }
    }
}
