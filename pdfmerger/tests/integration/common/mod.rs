//! Shared fixtures for integration tests.
//!
//! PDFs are generated on the fly: every fixture has a single page carrying
//! a `Marker` integer, so the page order of a merged file can be read back.

#![allow(dead_code)]

use lopdf::{Document, Object, Stream, dictionary};
use pdfmerger::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An input and an output directory inside a temporary directory.
pub struct Workspace {
    _temp_dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    /// Create empty input and output directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("input");
        let output = temp_dir.path().join("output");
        fs::create_dir_all(&input).unwrap();
        fs::create_dir_all(&output).unwrap();

        Self {
            _temp_dir: temp_dir,
            input,
            output,
        }
    }

    /// Write a one-page PDF into the input directory.
    pub fn page(&self, name: &str, marker: i64) -> PathBuf {
        write_pdf(&self.input.join(name), marker)
    }

    /// Write a one-page PDF below the output directory.
    pub fn signature(&self, relative: &str, marker: i64) -> PathBuf {
        write_pdf(&self.output.join(relative), marker)
    }

    /// Write a file that is not a PDF into the input directory.
    pub fn garbage(&self, name: &str) -> PathBuf {
        let path = self.input.join(name);
        fs::write(&path, b"%PDF-1.5\nthis file was cut short").unwrap();
        path
    }

    /// Configuration reading `input` and writing to `output`.
    pub fn config(&self) -> Config {
        Config::new(&self.input, &self.output)
    }

    /// Merged output file of a project.
    pub fn merged(&self, project: &str) -> PathBuf {
        self.output.join(format!("{project}.pdf"))
    }
}

/// Write a one-page PDF whose page carries `marker`.
pub fn write_pdf(path: &Path, marker: i64) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let content_id = doc.add_object(Stream::new(dictionary! {}, b"0 0 m 10 10 l S".to_vec()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Marker" => Object::Integer(marker),
    });

    // MediaBox is inherited from the page tree root.
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("Failed to write fixture PDF");
    path.to_path_buf()
}

/// Markers of the pages of a PDF, in page order.
pub fn page_markers(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Failed to load merged PDF");
    doc.get_pages()
        .into_values()
        .map(|id| {
            doc.get_dictionary(id)
                .and_then(|page| page.get(b"Marker"))
                .and_then(Object::as_i64)
                .expect("Page without marker")
        })
        .collect()
}

/// File names of a list of paths.
pub fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}
