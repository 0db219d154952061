//! PDF loading.
//!
//! Documents are parsed with `lopdf` on the blocking thread pool, one at a
//! time and in the order given.

use lopdf::Document;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{MergerError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Reject documents without pages.
    require_pages: bool,
}

impl PdfReader {
    /// Create a reader that rejects documents without pages.
    pub fn new() -> Self {
        Self {
            require_pages: true,
        }
    }

    /// Create a reader that accepts documents without pages.
    pub fn lenient() -> Self {
        Self {
            require_pages: false,
        }
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read or is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has no pages and this reader requires them
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let require_pages = self.require_pages;

        task::spawn_blocking(move || {
            let bytes = std::fs::read(&path_buf)
                .map_err(|e| MergerError::failed_to_load_pdf(path_buf.clone(), e.to_string()))?;

            let document = Document::load_mem(&bytes).map_err(|e| {
                let err_msg = e.to_string();
                if err_msg.contains("encrypt") || err_msg.contains("password") {
                    MergerError::encrypted_pdf(path_buf.clone())
                } else {
                    MergerError::failed_to_load_pdf(path_buf.clone(), err_msg)
                }
            })?;

            let page_count = document.get_pages().len();
            if require_pages && page_count == 0 {
                return Err(MergerError::corrupted_pdf(path_buf, "PDF has no pages"));
            }

            Ok(LoadedPdf {
                document,
                path: path_buf,
                page_count,
                file_size: bytes.len() as u64,
            })
        })
        .await
        .map_err(|e| MergerError::other(format!("Load task failed: {e}")))?
    }

    /// Load PDF documents one after another.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first load error.
    pub async fn load_sequential(&self, paths: &[PathBuf]) -> Result<Vec<LoadedPdf>> {
        let mut loaded = Vec::with_capacity(paths.len());

        for path in paths {
            let pdf = self.load(path).await?;
            tracing::debug!(
                file = %pdf.path.display(),
                pages = pdf.page_count,
                bytes = pdf.file_size,
                "loaded pdf"
            );
            loaded.push(pdf);
        }

        Ok(loaded)
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
