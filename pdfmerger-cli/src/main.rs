//! pdfmerger - Merge per-project PDF pages into one document per project.

mod cli;

use clap::Parser;
use std::path::PathBuf;
use std::process;

use crate::cli::Cli;
use pdfmerger::config::Config;
use pdfmerger::engine::LopdfEngine;
use pdfmerger::error::{MergerError, Result};
use pdfmerger::output::{create_formatter, display_run_header, display_run_report};
use pdfmerger::{logging, orchestrator};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config()?;

    if !config.dry_run {
        tokio::fs::create_dir_all(&config.output_dir).await?;
    }

    logging::init(config.debug, transcript_path(&config).as_deref())?;

    let formatter = create_formatter(&config);
    if formatter.should_print() {
        formatter.section(&format!("{} v{}", pdfmerger::NAME, pdfmerger::VERSION));
        display_run_header(&formatter, &config);
    }

    let engine = LopdfEngine::from_config(&config);
    let report = orchestrator::run(&config, &engine).await?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| MergerError::other(format!("Failed to serialize report: {e}")))?;
        println!("{json}");
    } else {
        display_run_report(&formatter, &report);
    }

    Ok(())
}

/// Transcript location; dry runs leave the output directory untouched.
fn transcript_path(config: &Config) -> Option<PathBuf> {
    (!config.dry_run).then(|| config.transcript_path())
}
