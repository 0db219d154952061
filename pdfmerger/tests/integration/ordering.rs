//! Scanning, grouping and ordering over real directory trees.

use pdfmerger::config::SpliceMode;
use pdfmerger::orchestrator::plan_merges;
use pdfmerger::project::ProjectSet;
use pdfmerger::signature::SignatureIndex;
use std::fs;

use crate::common::{Workspace, names};

#[test]
fn test_grouping_skips_subdirectories_and_other_files() {
    let ws = Workspace::new();
    for name in ["ALPHA-1.pdf", "ALPHA-2.pdf", "BETA-1.pdf", "notes.txt", "GAMMA-1.PDF"] {
        fs::write(ws.input.join(name), b"").unwrap();
    }
    fs::create_dir_all(ws.input.join("archive")).unwrap();
    fs::write(ws.input.join("archive/ALPHA-3.pdf"), b"").unwrap();

    let projects = ProjectSet::build(&ws.input).unwrap();

    assert_eq!(projects.keys().collect::<Vec<_>>(), vec!["ALPHA", "BETA"]);
    assert_eq!(
        names(projects.files("ALPHA").unwrap()),
        vec!["ALPHA-1.pdf", "ALPHA-2.pdf"]
    );
    assert_eq!(projects.file_count(), 3);
}

#[test]
fn test_signature_index_covers_whole_output_tree() {
    let ws = Workspace::new();
    for relative in [
        "signature-B.pdf",
        "2024/signature-B.pdf",
        "2024/deep/signature-C.pdf",
        "ALPHA.pdf",
    ] {
        let path = ws.output.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    let index = SignatureIndex::build(&ws.output).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(
        index.get("B").unwrap(),
        &[
            ws.output.join("2024/signature-B.pdf"),
            ws.output.join("signature-B.pdf"),
        ]
    );
    assert_eq!(
        index.get("C").unwrap(),
        &[ws.output.join("2024/deep/signature-C.pdf")]
    );
}

#[test]
fn test_plans_follow_project_order() {
    let ws = Workspace::new();
    for name in ["Zulu-B.pdf", "Alpha-C.pdf", "Alpha-B.pdf"] {
        fs::write(ws.input.join(name), b"").unwrap();
    }
    fs::write(ws.output.join("signature-B.pdf"), b"").unwrap();

    let config = ws.config();
    let projects = ProjectSet::build(&ws.input).unwrap();
    let index = SignatureIndex::build(&ws.output).unwrap();
    let plans = plan_merges(&projects, &index, &config);

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].project, "Alpha");
    assert_eq!(plans[0].output, ws.merged("Alpha"));
    assert_eq!(
        names(&plans[0].files),
        vec!["Alpha-B.pdf", "signature-B.pdf", "Alpha-C.pdf"]
    );
    assert_eq!(plans[1].project, "Zulu");
    assert_eq!(names(&plans[1].files), vec!["Zulu-B.pdf", "signature-B.pdf"]);
    assert_eq!(config.splice, SpliceMode::Anchored);
}
