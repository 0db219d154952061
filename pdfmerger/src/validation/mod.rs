//! Validation of merged output files.
//!
//! Every merged file is re-read from disk and checked before its project is
//! reported as merged. The relaxed checks are:
//! - The path exists and is a regular, non-empty file
//! - The file parses as a PDF and is not encrypted
//! - The document has at least one page
//!
//! [`ValidationMode::Strict`] additionally checks the document catalog, the
//! root page count and that every page has a media box.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::config::ValidationMode;
//! use pdfmerger::validation::Validator;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = Validator::new(ValidationMode::Strict);
//! let result = validator.validate_file(Path::new("out/ALPHA.pdf")).await?;
//! println!("PDF has {} pages", result.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, Object, ObjectId};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::ValidationMode;
use crate::engine::reader::PdfReader;
use crate::error::{MergerError, Result};

/// Upper bound on page tree depth when looking up inherited attributes.
const MAX_TREE_DEPTH: usize = 64;

/// Result of validating a single PDF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path to the validated file.
    pub path: PathBuf,

    /// Number of pages in the PDF.
    pub page_count: usize,

    /// PDF version (major, minor).
    pub version: Option<(u8, u8)>,

    /// Size of the file in bytes.
    pub file_size: u64,
}

impl ValidationResult {
    fn from_document(path: PathBuf, doc: &Document, file_size: u64) -> Self {
        let version = doc.version.split_once('.').map(|(major, minor)| {
            (
                major.parse::<u8>().unwrap_or_default(),
                minor.parse::<u8>().unwrap_or_default(),
            )
        });

        Self {
            path,
            page_count: doc.get_pages().len(),
            version,
            file_size,
        }
    }
}

/// Validator for merged PDF files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    /// Create a validator with the given mode.
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Validate a single PDF file.
    ///
    /// # Errors
    ///
    /// Returns [`MergerError::ValidationFailed`] naming the first failed
    /// check.
    pub async fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        let fail = |reason: String| MergerError::validation_failed(path.to_path_buf(), reason);

        if !path.exists() {
            return Err(fail("file does not exist".to_string()));
        }

        if !path.is_file() {
            return Err(fail("not a regular file".to_string()));
        }

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| fail(format!("file is not accessible: {e}")))?;

        if metadata.len() == 0 {
            return Err(fail("file is empty".to_string()));
        }

        let loaded = PdfReader::lenient()
            .load(path)
            .await
            .map_err(|e| fail(e.to_string()))?;

        if loaded.page_count == 0 {
            return Err(fail("PDF has no pages".to_string()));
        }

        if self.mode == ValidationMode::Strict {
            check_structure(&loaded.document).map_err(fail)?;
        }

        Ok(ValidationResult::from_document(
            path.to_path_buf(),
            &loaded.document,
            metadata.len(),
        ))
    }
}

/// Catalog, page count and media box checks.
fn check_structure(doc: &Document) -> std::result::Result<(), String> {
    let catalog = doc
        .catalog()
        .map_err(|e| format!("missing document catalog: {e}"))?;

    let is_catalog = catalog
        .get(b"Type")
        .and_then(Object::as_name)
        .is_ok_and(|name| name == b"Catalog");
    if !is_catalog {
        return Err("document catalog has wrong type".to_string());
    }

    let pages_id = catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|e| format!("catalog has no page tree: {e}"))?;

    let declared = doc
        .get_dictionary(pages_id)
        .and_then(|pages| pages.get(b"Count"))
        .and_then(Object::as_i64)
        .map_err(|e| format!("page tree has no count: {e}"))?;

    let pages = doc.get_pages();
    if usize::try_from(declared).ok() != Some(pages.len()) {
        return Err(format!(
            "page tree declares {declared} pages but has {}",
            pages.len()
        ));
    }

    for (number, page_id) in pages {
        if !has_media_box(doc, page_id) {
            return Err(format!("page {number} has no media box"));
        }
    }

    Ok(())
}

/// Whether a page has a media box, set directly or inherited.
fn has_media_box(doc: &Document, page_id: ObjectId) -> bool {
    let mut node_id = Some(page_id);
    let mut depth = 0;

    while let Some(id) = node_id {
        let Ok(node) = doc.get_dictionary(id) else {
            return false;
        };
        if node.has(b"MediaBox") {
            return true;
        }

        depth += 1;
        if depth >= MAX_TREE_DEPTH {
            return false;
        }
        node_id = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    false
}
