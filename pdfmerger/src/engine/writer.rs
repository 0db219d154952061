//! PDF writing.
//!
//! Files are written in place. A write that fails halfway leaves the
//! partial file behind; nothing is rolled back.

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{MergerError, Result};

/// Buffer size for writing (in bytes).
const WRITE_BUFFER_SIZE: usize = 8192;

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

/// PDF writer.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Save a PDF document and return statistics about the write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub async fn save(&self, doc: Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let mut doc = doc;

        task::spawn_blocking(move || {
            let start = Instant::now();

            let file = std::fs::File::create(&path_buf).map_err(|e| {
                MergerError::FailedToCreateOutput {
                    path: path_buf.clone(),
                    source: e,
                }
            })?;

            let mut writer = std::io::BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

            doc.save_to(&mut writer)
                .map_err(|e| MergerError::FailedToWrite {
                    path: path_buf.clone(),
                    source: std::io::Error::other(e),
                })?;

            writer.flush().map_err(|e| MergerError::FailedToWrite {
                path: path_buf.clone(),
                source: e,
            })?;

            let file_size = writer
                .get_ref()
                .metadata()
                .map_err(|e| MergerError::FailedToWrite {
                    path: path_buf.clone(),
                    source: e,
                })?
                .len();

            Ok(WriteStatistics {
                write_time: start.elapsed(),
                file_size,
                output_path: path_buf,
            })
        })
        .await
        .map_err(|e| MergerError::other(format!("Write task failed: {e}")))?
    }
}
