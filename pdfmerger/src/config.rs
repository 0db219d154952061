//! Configuration module for pdfmerger.
//!
//! This module turns the raw command-line values into a validated
//! [`Config`] that drives a run. It handles:
//! - Resolution of the input/output directory pair (flags or `IN::OUT`)
//! - Validation mode, splice mode and compression selection
//! - Location of the transcript log file

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{MergerError, Result};

/// Name of the transcript file written into the output directory.
pub const TRANSCRIPT_FILE_NAME: &str = "log.txt";

/// Separator between the two directories of the combined positional form.
pub const DIRECTORY_SEPARATOR: &str = "::";

/// Compression level for merged output PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    /// No compression - streams are written as loaded.
    None,
    /// Compress streams before writing.
    #[default]
    Standard,
    /// Compress streams and prune unreferenced objects.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = MergerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(MergerError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// How strictly merged output files are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// The file loads and has at least one page.
    #[default]
    Relaxed,
    /// Relaxed checks plus catalog and page tree consistency.
    Strict,
}

/// How signature files are spliced into a project's base order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpliceMode {
    /// Every anchor is followed by its signature files, computed over the
    /// unmodified base order.
    #[default]
    Anchored,
    /// Visit every base entry and insert after the first equal path of the
    /// growing list.
    ///
    /// Matches `Anchored` unless a path occurs twice, in which case all
    /// insertions land after its first occurrence. Kept to reproduce
    /// outputs of older runs.
    Legacy,
}

/// Validated configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Flat directory holding the project pages.
    pub input_dir: PathBuf,

    /// Directory receiving merged files and the transcript; also scanned
    /// for signature files.
    pub output_dir: PathBuf,

    /// Enable debug logging.
    pub debug: bool,

    /// Compute and log merge orders without merging anything.
    pub dry_run: bool,

    /// Suppress the console summary.
    pub quiet: bool,

    /// Validation applied to every merged file.
    pub validation: ValidationMode,

    /// Signature splicing strategy.
    pub splice: SpliceMode,

    /// Compression applied to merged files.
    pub compression: CompressionLevel,
}

impl Config {
    /// Create a configuration with defaults for everything but the two
    /// directories.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            debug: false,
            dry_run: false,
            quiet: false,
            validation: ValidationMode::default(),
            splice: SpliceMode::default(),
            compression: CompressionLevel::default(),
        }
    }

    /// Path of the transcript log file.
    pub fn transcript_path(&self) -> PathBuf {
        self.output_dir.join(TRANSCRIPT_FILE_NAME)
    }

    /// Path of the merged file for a project.
    pub fn output_path_for(&self, project_key: &str) -> PathBuf {
        output_path_for(&self.output_dir, project_key)
    }

    /// Validate the configuration without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if either directory is empty.
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(MergerError::invalid_config("Input directory is empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(MergerError::invalid_config("Output directory is empty"));
        }

        Ok(())
    }
}

/// Path of the merged file for a project inside `output_dir`.
pub fn output_path_for(output_dir: &Path, project_key: &str) -> PathBuf {
    output_dir.join(format!("{project_key}.pdf"))
}

/// Resolve the input and output directories.
///
/// Both flags given: used as-is. Exactly one flag given: configuration
/// error. Neither flag: the positional words are joined with single spaces
/// and split on `::`, which must yield exactly two parts; each part is
/// trimmed.
///
/// # Errors
///
/// Returns [`MergerError::InvalidConfig`] for the cases above.
///
/// # Examples
///
/// ```
/// use pdfmerger::config::resolve_directories;
/// use std::path::PathBuf;
///
/// let args = vec!["scans/in".to_string(), "::".to_string(), "scans/out".to_string()];
/// let (input, output) = resolve_directories(None, None, &args).unwrap();
/// assert_eq!(input, PathBuf::from("scans/in"));
/// assert_eq!(output, PathBuf::from("scans/out"));
/// ```
pub fn resolve_directories(
    input: Option<&Path>,
    output: Option<&Path>,
    args: &[String],
) -> Result<(PathBuf, PathBuf)> {
    match (input, output) {
        (Some(input), Some(output)) => Ok((input.to_path_buf(), output.to_path_buf())),
        (Some(_), None) | (None, Some(_)) => Err(MergerError::invalid_config(
            "must use both -i and -o or neither",
        )),
        (None, None) => {
            let line = args.join(" ");
            tracing::debug!(%line, "joined positional arguments");

            let parts: Vec<&str> = line.split(DIRECTORY_SEPARATOR).collect();
            if parts.len() != 2 {
                return Err(MergerError::invalid_config(format!(
                    "expected '<INPUT>{DIRECTORY_SEPARATOR}<OUTPUT>', got {parts:?}"
                )));
            }

            let input = parts[0].trim();
            let output = parts[1].trim();
            if input.is_empty() || output.is_empty() {
                return Err(MergerError::invalid_config(format!(
                    "both directories are required in '<INPUT>{DIRECTORY_SEPARATOR}<OUTPUT>', got {parts:?}"
                )));
            }

            Ok((PathBuf::from(input), PathBuf::from(output)))
        }
    }
}
