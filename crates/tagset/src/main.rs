//! tagset - Entry Point
//!
//! Runs the shipped rule set against an exported configuration document.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `tagset check --document plan.json` | Check with `.tagset.toml` from the current directory |
//! | `tagset check -c lint.toml -d plan.json --format json` | Explicit config, JSON output |
//!
//! Exits with status 1 when a rule failed or an error-severity issue was
//! reported.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tagset::infrastructure::{ConfigDocument, ConfigLoader, DocumentRunner, init_logging};
use tagset::rules::RuleSet;
use tagset::{OutputFormat, has_errors, render};
use tracing::info;

/// Command line interface for tagset
#[derive(Parser, Debug)]
#[command(name = "tagset")]
#[command(about = "Tag compliance checks for infrastructure-as-code declarations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run enabled rules against a configuration document
    Check {
        /// Path to the lint configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the JSON configuration document
        #[arg(short, long)]
        document: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the check passed
fn run(cli: Cli) -> Result<bool> {
    let Command::Check {
        config,
        document,
        format,
    } = cli.command;

    let mut loader = ConfigLoader::new();
    if let Some(path) = &config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load lint configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let document = ConfigDocument::from_path(&document)
        .with_context(|| format!("Failed to load document {}", document.display()))?;

    let ruleset = RuleSet::builtin();
    info!(
        ruleset = ruleset.name(),
        version = ruleset.version(),
        "Running rule set"
    );

    let mut runner = DocumentRunner::new(document, config.clone());
    let report = ruleset.check(&mut runner, |rule| {
        config.is_enabled(rule.name(), rule.enabled())
    });

    for failure in &report.failures {
        eprintln!("Rule {} failed: {}", failure.rule, failure.error);
    }

    let issues = runner.into_issues();
    print!(
        "{}",
        render(&issues, format).context("Failed to render issues")?
    );
    if format == OutputFormat::Json {
        println!();
    }

    Ok(report.is_success() && !has_errors(&issues))
}
