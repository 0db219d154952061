//! Tracing initialization.
//!
//! Log lines go to stderr and, for real runs, to a transcript file in the
//! output directory. The transcript is truncated when the subscriber is
//! installed and gets the same lines as the console without colors.

use anyhow::Context;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the log filter.
pub const LOG_ENV_VAR: &str = "PDFMERGER_LOG";

/// Default filter directives.
///
/// Only this project logs at `info` (or `debug`); dependencies are limited
/// to warnings.
pub fn default_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("warn,pdfmerger={level}")
}

/// Install the global subscriber.
///
/// `PDFMERGER_LOG` takes precedence over `debug`. Format:
/// `PDFMERGER_LOG=pdfmerger::order=debug,pdfmerger=info`.
///
/// # Errors
///
/// Fails if the transcript cannot be created or a subscriber is already
/// installed.
pub fn init(debug: bool, transcript: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));

    let transcript_layer = transcript
        .map(|path| {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            anyhow::Ok(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(debug)
                    .with_writer(Mutex::new(file)),
            )
        })
        .transpose()?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug)
                .with_line_number(debug),
        )
        .with(transcript_layer)
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
