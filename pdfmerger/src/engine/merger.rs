//! Page tree concatenation.
//!
//! The first document is the base. Every following document is renumbered
//! past the base's highest object id, its objects are copied in and its
//! pages are appended to the base's root page tree node.

use lopdf::{Document, Object, ObjectId};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::CompressionLevel;
use crate::engine::reader::LoadedPdf;
use crate::error::{MergerError, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Upper bound on page tree depth when resolving inherited attributes.
const MAX_TREE_DEPTH: usize = 64;

/// Statistics about one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStatistics {
    /// Number of files merged.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Total size of the input files.
    pub input_size: u64,

    /// Size of the written output file.
    pub output_size: u64,

    /// Time taken to load, merge and write.
    #[serde(skip)]
    pub merge_time: Duration,
}

/// Concatenates loaded documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Merger {
    compression: CompressionLevel,
}

impl Merger {
    /// Create a merger applying the given compression.
    pub fn new(compression: CompressionLevel) -> Self {
        Self { compression }
    }

    /// Merge documents, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if `loaded` is empty or a page tree is malformed.
    pub fn merge_documents(&self, loaded: Vec<LoadedPdf>, output: PathBuf) -> Result<Document> {
        let mut documents = loaded.into_iter().map(|pdf| pdf.document);

        let Some(mut merged) = documents.next() else {
            return Err(MergerError::NoFilesToMerge { output });
        };
        let pages_id = root_pages_id(&merged)?;
        let mut max_id = merged.max_id;

        for mut doc in documents {
            doc.renumber_objects_with(max_id + 1);
            max_id = doc.max_id;

            let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
            let inherited: Vec<_> = page_ids
                .iter()
                .map(|&id| inherited_attributes(&doc, id))
                .collect();

            merged.objects.extend(doc.objects);

            for (&page_id, attributes) in page_ids.iter().zip(inherited) {
                reparent_page(&mut merged, page_id, pages_id, attributes)?;
            }
            append_kids(&mut merged, pages_id, &page_ids)?;
        }
        merged.max_id = max_id;

        match self.compression {
            CompressionLevel::None => {}
            CompressionLevel::Standard => merged.compress(),
            CompressionLevel::Maximum => {
                merged.prune_objects();
                merged.compress();
            }
        }

        merged.renumber_objects();

        Ok(merged)
    }
}

/// Object id of the root page tree node.
fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    doc.catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| MergerError::merge_failed(format!("Failed to get pages reference: {e}")))
}

/// Attributes a page inherits from its ancestors and does not set itself.
///
/// `Rotate` and `CropBox` are always filled in, with their defaults when no
/// ancestor sets them, so that the merged root node cannot supply its own.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(&'static [u8], Object)> {
    let mut found: Vec<(&'static [u8], Object)> = Vec::new();
    let Ok(page) = doc.get_dictionary(page_id) else {
        return found;
    };

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(node_id) = parent {
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        for key in INHERITABLE_KEYS {
            let missing = page.get(key).is_err() && !found.iter().any(|(k, _)| *k == key);
            if missing && let Ok(value) = node.get(key) {
                found.push((key, value.clone()));
            }
        }

        depth += 1;
        if depth >= MAX_TREE_DEPTH {
            break;
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    let is_set = |found: &[(&'static [u8], Object)], key: &[u8]| {
        page.get(key).is_ok() || found.iter().any(|(k, _)| *k == key)
    };

    if !is_set(&found, b"Rotate") {
        found.push((b"Rotate".as_slice(), Object::Integer(0)));
    }

    if !is_set(&found, b"CropBox") {
        let media_box = page
            .get(b"MediaBox")
            .ok()
            .or_else(|| found.iter().find(|(k, _)| *k == b"MediaBox").map(|(_, v)| v))
            .cloned();
        if let Some(media_box) = media_box {
            found.push((b"CropBox".as_slice(), media_box));
        }
    }

    found
}

/// Point a page at the merged root node, copying inherited attributes
/// onto the page first so they survive the move.
fn reparent_page(
    merged: &mut Document,
    page_id: ObjectId,
    pages_id: ObjectId,
    attributes: Vec<(&'static [u8], Object)>,
) -> Result<()> {
    let page = merged
        .get_dictionary_mut(page_id)
        .map_err(|e| MergerError::merge_failed(format!("Failed to get page: {e}")))?;

    for (key, value) in attributes {
        page.set(key, value);
    }
    page.set("Parent", Object::Reference(pages_id));

    Ok(())
}

/// Append page references to the root node's Kids and bump its Count.
fn append_kids(merged: &mut Document, pages_id: ObjectId, page_ids: &[ObjectId]) -> Result<()> {
    let pages = merged
        .get_dictionary_mut(pages_id)
        .map_err(|e| MergerError::merge_failed(format!("Failed to get pages object: {e}")))?;

    let kids = pages
        .get_mut(b"Kids")
        .and_then(Object::as_array_mut)
        .map_err(|_| MergerError::merge_failed("Pages dictionary missing Kids array"))?;
    kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));

    let count = pages.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
    pages.set("Count", Object::Integer(count + page_ids.len() as i64));

    Ok(())
}
