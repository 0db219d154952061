//! Merge order construction.
//!
//! A project's merge order is built in two stages:
//!
//! 1. **Base order**: paths are sorted by their full string with every `-`
//!    removed, compared lexicographically. The comparison is not numeric
//!    aware, so `ALPHA-10.pdf` sorts before `ALPHA-2.pdf`. Existing
//!    projects depend on this order, so it is kept as is; pad numbers with
//!    zeros to get numeric order.
//! 2. **Signature splicing**: each non-signature file whose suffix key has
//!    entries in the [`SignatureIndex`] is followed by all of them.
//!
//! # Examples
//!
//! ```
//! use pdfmerger::config::SpliceMode;
//! use pdfmerger::order::build_merge_order;
//! use pdfmerger::signature::SignatureIndex;
//! use std::path::PathBuf;
//!
//! let files = vec![PathBuf::from("A-C.pdf"), PathBuf::from("A-B.pdf")];
//! let index = SignatureIndex::from([("B", vec![PathBuf::from("sig-B.pdf")])]);
//!
//! let order = build_merge_order(&files, &index, SpliceMode::Anchored);
//! assert_eq!(
//!     order,
//!     vec![
//!         PathBuf::from("A-B.pdf"),
//!         PathBuf::from("sig-B.pdf"),
//!         PathBuf::from("A-C.pdf"),
//!     ]
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::classify::{KEY_DELIMITER, file_name_str, is_signature_name, suffix_key_of};
use crate::config::SpliceMode;
use crate::signature::SignatureIndex;

/// Sort key of a path for the base order.
pub fn base_sort_key(path: &Path) -> String {
    path.to_string_lossy().replace(KEY_DELIMITER, "")
}

/// Sort paths into base order.
///
/// The sort is stable: paths with equal keys (`A-BC.pdf` and `A-B-C.pdf`)
/// keep their discovery order.
pub fn base_order(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut ordered = paths.to_vec();
    ordered.sort_by_cached_key(|path| base_sort_key(path));
    ordered
}

/// Signature files to insert after `path`, if it is an anchor.
fn signatures_for<'a>(path: &Path, index: &'a SignatureIndex) -> Option<&'a [PathBuf]> {
    let name = file_name_str(path)?;

    if is_signature_name(name) {
        tracing::debug!(file = %path.display(), "skipping signature file");
        return None;
    }

    let suffix = suffix_key_of(name)?;
    let signatures = index.get(suffix).filter(|files| !files.is_empty())?;

    tracing::debug!(
        file = %path.display(),
        suffix,
        count = signatures.len(),
        "inserting signature files"
    );

    Some(signatures)
}

/// Splice signature files into a base-ordered list.
pub fn splice_signatures(
    ordered: &[PathBuf],
    index: &SignatureIndex,
    mode: SpliceMode,
) -> Vec<PathBuf> {
    if index.is_empty() {
        return ordered.to_vec();
    }

    match mode {
        SpliceMode::Anchored => splice_anchored(ordered, index),
        SpliceMode::Legacy => splice_legacy(ordered, index),
    }
}

fn splice_anchored(ordered: &[PathBuf], index: &SignatureIndex) -> Vec<PathBuf> {
    // Anchors are found on the untouched base order, so no insertion can
    // move another anchor.
    let anchors: Vec<(usize, &[PathBuf])> = ordered
        .iter()
        .enumerate()
        .filter_map(|(idx, path)| signatures_for(path, index).map(|sigs| (idx, sigs)))
        .collect();

    let extra: usize = anchors.iter().map(|(_, sigs)| sigs.len()).sum();
    let mut spliced = Vec::with_capacity(ordered.len() + extra);
    let mut anchors = anchors.into_iter().peekable();

    for (idx, path) in ordered.iter().enumerate() {
        spliced.push(path.clone());
        if let Some((_, sigs)) = anchors.next_if(|(anchor, _)| *anchor == idx) {
            spliced.extend(sigs.iter().cloned());
        }
    }

    spliced
}

fn splice_legacy(ordered: &[PathBuf], index: &SignatureIndex) -> Vec<PathBuf> {
    let mut working = ordered.to_vec();

    // Every base entry is visited once. Its insertion point is looked up
    // in the growing list by the first path equal to it.
    for (idx, visited) in ordered.iter().enumerate() {
        let Some(sigs) = signatures_for(visited, index) else {
            continue;
        };

        if idx + 1 == working.len() {
            working.extend(sigs.iter().cloned());
            continue;
        }

        let at = working
            .iter()
            .position(|path| path == visited)
            .map_or(0, |pos| pos + 1);
        working.splice(at..at, sigs.iter().cloned());
    }

    working
}

/// Build the final merge order of one project.
pub fn build_merge_order(
    files: &[PathBuf],
    index: &SignatureIndex,
    mode: SpliceMode,
) -> Vec<PathBuf> {
    let ordered = base_order(files);
    splice_signatures(&ordered, index, mode)
}
