//! Grouping of input files into projects.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::classify::FileRecord;
use crate::error::Result;
use crate::scan;

/// Input files grouped by project key.
///
/// Within a project, paths keep discovery order. Projects iterate in
/// lexicographic key order regardless of the order they were discovered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectSet {
    projects: BTreeMap<String, Vec<PathBuf>>,
}

impl ProjectSet {
    /// Create an empty project set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `input_dir` and group its PDF files.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergerError::Scan`] if the directory cannot be read.
    pub fn build(input_dir: &Path) -> Result<Self> {
        let records = scan::input_records(input_dir)?;
        let set = Self::from_records(records);

        tracing::info!(
            projects = set.len(),
            files = set.file_count(),
            directory = %input_dir.display(),
            "grouped input files"
        );

        Ok(set)
    }

    /// Group already classified records.
    pub fn from_records(records: impl IntoIterator<Item = FileRecord>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.insert(record);
        }
        set
    }

    /// Append a record to its project.
    pub fn insert(&mut self, record: FileRecord) {
        self.projects
            .entry(record.project_key)
            .or_default()
            .push(record.path);
    }

    /// Files of one project, in discovery order.
    pub fn files(&self, project_key: &str) -> Option<&[PathBuf]> {
        self.projects.get(project_key).map(Vec::as_slice)
    }

    /// Project keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Projects and their files, in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.projects
            .iter()
            .map(|(key, files)| (key.as_str(), files.as_slice()))
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether there are no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Total number of files across all projects.
    pub fn file_count(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }
}
