//! Index of signature files by suffix key.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::classify::{file_name_str, signature_key_of};
use crate::error::Result;
use crate::scan;

/// Signature files keyed by the suffix key they attach to.
///
/// Each key maps to its files in discovery order. The index is read-only
/// once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignatureIndex {
    entries: BTreeMap<String, Vec<PathBuf>>,
}

impl SignatureIndex {
    /// Scan `output_dir` recursively and index every signature file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergerError::Scan`] if the tree cannot be read; no
    /// partial index is returned.
    pub fn build(output_dir: &Path) -> Result<Self> {
        let candidates = scan::signature_candidates(output_dir)?;
        let index = Self::from_paths(candidates);

        tracing::info!(
            keys = index.len(),
            directory = %output_dir.display(),
            "indexed signature files"
        );

        Ok(index)
    }

    /// Index signature file paths, preserving their order per key.
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut entries: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

        for path in paths {
            let key = match file_name_str(&path) {
                Some(name) => signature_key_of(name).to_string(),
                None => {
                    tracing::warn!(file = %path.display(), "signature file name is not UTF-8, skipping");
                    continue;
                }
            };

            tracing::debug!(file = %path.display(), suffix = %key, "adding signature file");
            entries.entry(key).or_default().push(path);
        }

        Self { entries }
    }

    /// Signature files for a suffix key.
    pub fn get(&self, suffix_key: &str) -> Option<&[PathBuf]> {
        self.entries.get(suffix_key).map(Vec::as_slice)
    }

    /// Number of distinct suffix keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no signature files were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, Vec<PathBuf>); N]> for SignatureIndex {
    fn from(entries: [(&str, Vec<PathBuf>); N]) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, paths)| (key.to_string(), paths))
                .collect(),
        }
    }
}
