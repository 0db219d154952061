//! Filename classification.
//!
//! Every decision about where a file goes is taken from its name alone:
//!
//! - the **project key** is the first `-` separated token of the name,
//! - the **suffix key** is the second token and selects signature files,
//! - a **signature file** is any file whose name contains `signature`.
//!
//! All functions here are pure.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Token separating the parts of a filename.
pub const KEY_DELIMITER: char = '-';

/// Token marking a file as a signature file.
pub const SIGNATURE_TOKEN: &str = "signature";

/// Prefix removed from signature file names before keying them.
pub const SIGNATURE_PREFIX: &str = "signature-";

/// Strip the extension of a file name.
///
/// The extension starts at the last `.` of the name, so `a.b.pdf` becomes
/// `a.b` and a name made only of an extension becomes empty.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Derive the project key of a file name.
///
/// # Examples
///
/// ```
/// use pdfmerger::classify::project_key_of;
///
/// assert_eq!(project_key_of("ALPHA-1.pdf"), "ALPHA");
/// assert_eq!(project_key_of("NoDashHere.pdf"), "NoDashHere");
/// ```
pub fn project_key_of(name: &str) -> &str {
    let stem = strip_extension(name);
    match stem.split_once(KEY_DELIMITER) {
        Some((first, _)) => first,
        None => stem,
    }
}

/// Derive the suffix key of a file name, if it has one.
///
/// Names with fewer than two `-` separated segments have no suffix key and
/// can never anchor a signature insertion.
///
/// # Examples
///
/// ```
/// use pdfmerger::classify::suffix_key_of;
///
/// assert_eq!(suffix_key_of("ALPHA-B.pdf"), Some("B"));
/// assert_eq!(suffix_key_of("ALPHA-B-2.pdf"), Some("B"));
/// assert_eq!(suffix_key_of("NoDash.pdf"), None);
/// ```
pub fn suffix_key_of(name: &str) -> Option<&str> {
    let stem = strip_extension(name);
    let segment = stem.split(KEY_DELIMITER).nth(1)?;
    Some(strip_extension(segment))
}

/// Derive the index key of a signature file name.
///
/// The extension and a leading `signature-` are removed, then everything
/// from the first `.` on is dropped: `signature-B.v2.pdf` keys as `B`.
pub fn signature_key_of(name: &str) -> &str {
    let stem = strip_extension(name);
    let stem = stem.strip_prefix(SIGNATURE_PREFIX).unwrap_or(stem);
    match stem.split_once('.') {
        Some((key, _)) => key,
        None => stem,
    }
}

/// Whether a file name marks a signature file.
pub fn is_signature_name(name: &str) -> bool {
    name.contains(SIGNATURE_TOKEN)
}

/// Whether the final component of `path` marks a signature file.
pub fn is_signature_file(path: &Path) -> bool {
    file_name_str(path).is_some_and(is_signature_name)
}

/// Final path component as UTF-8, if it is valid UTF-8.
pub fn file_name_str(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// A classified input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Location of the file.
    pub path: PathBuf,

    /// Project the file belongs to. Never empty.
    pub project_key: String,

    /// Key used to look up signature files for this file.
    pub suffix_key: Option<String>,
}

impl FileRecord {
    /// Classify a file by its name.
    ///
    /// Returns `None` when the name is not valid UTF-8 or yields an empty
    /// project key (for example `-draft.pdf`).
    pub fn classify(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = file_name_str(&path)?;

        let project_key = project_key_of(name);
        if project_key.is_empty() {
            return None;
        }

        let project_key = project_key.to_string();
        let suffix_key = suffix_key_of(name).map(str::to_string);

        Some(Self {
            path,
            project_key,
            suffix_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ALPHA-1.pdf", "ALPHA")]
    #[case("NoDashHere.pdf", "NoDashHere")]
    #[case("ALPHA-B-3.pdf", "ALPHA")]
    #[case("alpha.v2-1.pdf", "alpha")]
    #[case("NoExtension", "NoExtension")]
    #[case("-draft.pdf", "")]
    fn test_project_key_of(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(project_key_of(name), expected);
    }

    #[rstest]
    #[case("ALPHA-B.pdf", Some("B"))]
    #[case("ALPHA-B-3.pdf", Some("B"))]
    #[case("ALPHA-B.x.pdf", Some("B"))]
    #[case("ALPHA-.pdf", Some(""))]
    #[case("NoDash.pdf", None)]
    fn test_suffix_key_of(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(suffix_key_of(name), expected);
    }

    #[rstest]
    #[case("signature-B.pdf", "B")]
    #[case("signature-B.v2.pdf", "B")]
    #[case("signature-B-extra.pdf", "B-extra")]
    #[case("signature.pdf", "signature")]
    #[case("B-signature.pdf", "B-signature")]
    fn test_signature_key_of(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(signature_key_of(name), expected);
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("a.pdf"), "a");
        assert_eq!(strip_extension("a.b.pdf"), "a.b");
        assert_eq!(strip_extension("plain"), "plain");
        assert_eq!(strip_extension(".pdf"), "");
    }

    #[test]
    fn test_is_signature_file() {
        assert!(is_signature_file(Path::new("out/signature-B.pdf")));
        assert!(is_signature_file(Path::new("A-signature.pdf")));
        assert!(!is_signature_file(Path::new("signatures/A-B.pdf")));
        assert!(!is_signature_file(Path::new("A-B.pdf")));
    }

    #[test]
    fn test_classify() {
        let record = FileRecord::classify("in/ALPHA-B.pdf").unwrap();
        assert_eq!(record.project_key, "ALPHA");
        assert_eq!(record.suffix_key.as_deref(), Some("B"));
        assert_eq!(record.path, PathBuf::from("in/ALPHA-B.pdf"));

        let record = FileRecord::classify("in/Solo.pdf").unwrap();
        assert_eq!(record.project_key, "Solo");
        assert_eq!(record.suffix_key, None);
    }

    #[test]
    fn test_classify_rejects_empty_project_key() {
        assert!(FileRecord::classify("in/-draft.pdf").is_none());
        assert!(FileRecord::classify("in/.pdf").is_none());
    }
}
