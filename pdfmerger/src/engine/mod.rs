//! PDF engine.
//!
//! The orchestrator only needs two things from a PDF backend: concatenate
//! an ordered list of files into one output file, and check that a file is
//! a usable PDF. [`PdfEngine`] is that seam; [`LopdfEngine`] implements it
//! on top of `lopdf`.

pub mod merger;
pub mod reader;
pub mod writer;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{CompressionLevel, Config, ValidationMode};
use crate::error::{MergerError, Result};
use crate::validation::{ValidationResult, Validator};

pub use merger::{MergeStatistics, Merger};
pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteStatistics};

/// Backend that merges and validates PDF files.
pub trait PdfEngine {
    /// Concatenate `inputs`, in order, into a single file at `output`.
    fn merge(
        &self,
        inputs: &[PathBuf],
        output: &Path,
    ) -> impl Future<Output = Result<MergeStatistics>> + Send;

    /// Check that `path` is a usable PDF.
    fn validate(&self, path: &Path) -> impl Future<Output = Result<ValidationResult>> + Send;
}

/// [`PdfEngine`] backed by `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfEngine {
    reader: PdfReader,
    merger: Merger,
    writer: PdfWriter,
    validator: Validator,
}

impl LopdfEngine {
    /// Create an engine with the given compression and validation.
    pub fn new(compression: CompressionLevel, validation: ValidationMode) -> Self {
        Self {
            reader: PdfReader::new(),
            merger: Merger::new(compression),
            writer: PdfWriter::new(),
            validator: Validator::new(validation),
        }
    }

    /// Create an engine configured for a run.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.compression, config.validation)
    }
}

impl PdfEngine for LopdfEngine {
    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<MergeStatistics> {
        if inputs.is_empty() {
            return Err(MergerError::NoFilesToMerge {
                output: output.to_path_buf(),
            });
        }

        let start = Instant::now();
        let loaded = self.reader.load_sequential(inputs).await?;

        let files_merged = loaded.len();
        let input_size = loaded.iter().map(|pdf| pdf.file_size).sum();

        let merger = self.merger;
        let output_buf = output.to_path_buf();
        let document = tokio::task::spawn_blocking(move || merger.merge_documents(loaded, output_buf))
            .await
            .map_err(|e| MergerError::other(format!("Merge task failed: {e}")))??;

        let total_pages = document.get_pages().len();
        let written = self.writer.save(document, output).await?;
        tracing::debug!(
            output = %written.output_path.display(),
            bytes = written.file_size,
            elapsed = ?written.write_time,
            "wrote merged file"
        );

        Ok(MergeStatistics {
            files_merged,
            total_pages,
            input_size,
            output_size: written.file_size,
            merge_time: start.elapsed(),
        })
    }

    async fn validate(&self, path: &Path) -> Result<ValidationResult> {
        self.validator.validate_file(path).await
    }
}
