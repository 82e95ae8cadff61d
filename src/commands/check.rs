//! `rulecheck check` - validate every rule document under a rules root.

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::discover::discover;
use crate::report::RunReport;
use crate::validator::validate;

/// Output mode for the check command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-document pass/fail lines plus a summary.
    Text,
    /// The full run report as JSON, for machine consumers.
    Json,
}

/// Execute the check command.
///
/// Prints the report and exits with code 1 if any document is invalid;
/// this exit status is the contract CI gates depend on.
pub fn execute(root: &Path, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let sources = discover(root, &config.extension)?;

    if sources.is_empty() {
        println!(
            "{} No rule documents found under {}",
            "ℹ".blue(),
            root.display()
        );
        return Ok(());
    }

    let report = validate(&sources, &config)?;

    match format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn print_report(report: &RunReport) {
    for document in &report.documents {
        if document.is_valid() {
            println!("{} {}", "✓".green(), document.identifier);
        } else {
            println!("{} {}", "✗".red(), document.identifier);
            for diagnostic in &document.diagnostics {
                println!("    {} {}", "→".yellow(), diagnostic.message);
            }
        }
    }

    println!();
    if report.is_success() {
        println!("{} {}", "✓".green().bold(), report.summary());
    } else {
        println!("{} {}", "✗".red().bold(), report.summary());
    }
}
