//! CLI argument parsing for pdfmerger.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger_cli::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let config = cli.to_config().expect("invalid arguments");
//! ```

use clap::Parser;
use std::path::PathBuf;

use pdfmerger::config::{
    CompressionLevel, Config, SpliceMode, ValidationMode, resolve_directories,
};
use pdfmerger::error::Result;

/// Merge per-project PDF pages into one document per project.
///
/// Every PDF file of the input directory belongs to the project named by
/// the part of its file name before the first '-'. Each project is merged
/// into <OUTPUT>/<PROJECT>.pdf. Signature files found anywhere under the
/// output directory are inserted after the page whose second name part
/// matches them: `signature-B.pdf` follows `ALPHA-B.pdf`.
#[derive(Parser, Debug)]
#[command(name = "pdfmerger")]
#[command(version)]
#[command(about = "Merge per-project PDF pages into one document per project", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding the project pages
    ///
    /// Must be combined with --output-directory.
    #[arg(short, long = "input-directory", value_name = "INPUT")]
    pub input_directory: Option<PathBuf>,

    /// Directory receiving the merged files and log.txt
    ///
    /// Also searched recursively for signature files.
    /// Must be combined with --input-directory.
    #[arg(short, long = "output-directory", value_name = "OUTPUT")]
    pub output_directory: Option<PathBuf>,

    /// Both directories as a single argument
    ///
    /// Used when neither -i nor -o is given. The words are joined with
    /// single spaces, so unquoted paths with spaces work.
    ///
    /// Example:
    ///   pdfmerger My Scans::Merged
    #[arg(value_name = "INPUT::OUTPUT")]
    pub directories: Vec<String>,

    /// Log classification and splicing details
    #[arg(long)]
    pub debug: bool,

    /// Compute and print merge orders without writing anything
    ///
    /// No output directory is created and no log.txt is written.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Splice signature files the way older releases did
    ///
    /// Older releases looked up each anchor by path in the growing list, so
    /// a path listed twice received every insertion after its first
    /// occurrence. Only useful to reproduce old outputs.
    #[arg(long)]
    pub legacy_splice: bool,

    /// Also check the catalog and page tree of merged files
    #[arg(long)]
    pub strict_validation: bool,

    /// Compression level for merged files
    ///
    /// - none: streams are written as loaded
    /// - standard: compress streams (default)
    /// - maximum: compress streams and drop unreferenced objects
    #[arg(short, long, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be resolved or the
    /// compression level is invalid.
    pub fn to_config(&self) -> Result<Config> {
        let (input_dir, output_dir) = resolve_directories(
            self.input_directory.as_deref(),
            self.output_directory.as_deref(),
            &self.directories,
        )?;

        let config = Config {
            input_dir,
            output_dir,
            debug: self.debug,
            dry_run: self.dry_run,
            quiet: self.quiet || self.json,
            validation: if self.strict_validation {
                ValidationMode::Strict
            } else {
                ValidationMode::Relaxed
            },
            splice: if self.legacy_splice {
                SpliceMode::Legacy
            } else {
                SpliceMode::Anchored
            },
            compression: self.compression.parse::<CompressionLevel>()?,
        };

        config.validate()?;
        Ok(config)
    }
}
