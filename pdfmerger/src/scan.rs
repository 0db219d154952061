//! Directory walks.
//!
//! The two walks of a run live here and nowhere else. They return plain
//! lists; grouping and indexing of those lists happen in
//! [`crate::project`] and [`crate::signature`].
//!
//! Both walks visit entries in file-name order so that discovery order,
//! and therefore every merge order, is the same on every filesystem.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::classify::{FileRecord, file_name_str, is_signature_name};
use crate::error::{MergerError, Result};

/// Extension an input file must carry to take part in a merge.
pub const PDF_EXTENSION: &str = ".pdf";

/// Walk the input directory and classify its PDF files.
///
/// Only the top level is considered: every subdirectory is skipped along
/// with its subtree. Files that are not `.pdf` and files whose names are
/// not UTF-8 are skipped. Every skip is logged.
///
/// # Errors
///
/// Returns [`MergerError::Scan`] if the directory or one of its entries
/// cannot be read.
pub fn input_records(input_dir: &Path) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();
    let mut walker = WalkDir::new(input_dir).sort_by_file_name().into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| MergerError::scan(input_dir.to_path_buf(), e))?;

        if entry.file_type().is_dir() {
            if entry.depth() > 0 {
                tracing::info!(directory = %entry.path().display(), "skipping directory");
                walker.skip_current_dir();
            }
            continue;
        }

        let path = entry.into_path();
        let Some(name) = file_name_str(&path) else {
            tracing::warn!(file = %path.display(), "file name is not UTF-8, skipping");
            continue;
        };
        if !name.ends_with(PDF_EXTENSION) {
            tracing::info!(file = %path.display(), "skipping non-pdf file");
            continue;
        }

        match FileRecord::classify(&path) {
            Some(record) => {
                tracing::debug!(
                    file = %record.path.display(),
                    project = %record.project_key,
                    suffix = ?record.suffix_key,
                    "classified file"
                );
                records.push(record);
            }
            None => {
                tracing::warn!(file = %path.display(), "cannot derive a project key, skipping");
            }
        }
    }

    Ok(records)
}

/// Walk the output directory and collect signature file candidates.
///
/// The walk is recursive and every entry whose name contains `signature`
/// is returned, directories included. A missing output directory has no
/// signature files.
///
/// # Errors
///
/// Returns [`MergerError::Scan`] if the tree cannot be read.
pub fn signature_candidates(output_dir: &Path) -> Result<Vec<PathBuf>> {
    if !output_dir.exists() {
        tracing::debug!(
            directory = %output_dir.display(),
            "output directory does not exist, no signature files"
        );
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(output_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| MergerError::scan(output_dir.to_path_buf(), e))?;

        if is_signature_name(&entry.file_name().to_string_lossy()) {
            tracing::debug!(file = %entry.path().display(), "found signature file");
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}
