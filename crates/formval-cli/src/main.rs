//! # formval CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.
//!
//! Exit status: 0 when the document is valid, 1 when it has validation
//! errors, 2 when the rules or the document cannot be used.

use std::process::ExitCode;

use clap::Parser;

/// formval — declarative object validation.
#[derive(Parser, Debug)]
#[command(name = "formval", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a document against a rule file.
    Check(formval_cli::check::CheckArgs),
    /// Show the fields a rule file configures.
    Rules(formval_cli::rules::RulesArgs),
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Check(args) => {
            let bag = formval_cli::check::run_check(&args)?;
            println!("{}", formval_cli::check::render(&bag, args.pretty)?);
            if bag.has_errors() {
                Ok(ExitCode::from(1))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Commands::Rules(args) => {
            print!("{}", formval_cli::rules::run_rules(&args)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "formval failed");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
