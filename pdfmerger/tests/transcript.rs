//! Transcript file written by the logging layer.
//!
//! Installing the global subscriber can only happen once per process, so
//! this lives in its own test binary.

#[path = "integration/common/mod.rs"]
mod common;

use common::Workspace;
use pdfmerger::engine::LopdfEngine;
use pdfmerger::{logging, orchestrator};
use std::fs;

#[tokio::test]
async fn test_transcript_records_orders_and_failures() {
    let ws = Workspace::new();
    let good = [ws.page("A-1.pdf", 1), ws.page("A-2.pdf", 2)];
    let broken = ws.garbage("B-1.pdf");

    let config = ws.config();
    let transcript = config.transcript_path();
    logging::init(false, Some(&transcript)).unwrap();

    let report = orchestrator::run(&config, &LopdfEngine::from_config(&config))
        .await
        .unwrap();
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);

    let contents = fs::read_to_string(&transcript).unwrap();

    assert!(contents.contains("order of merging into project A:"));
    assert!(contents.contains("order of merging into project B:"));
    for path in good.iter().chain([&broken]) {
        assert!(
            contents.contains(&path.display().to_string()),
            "{} missing from transcript",
            path.display()
        );
    }
    assert!(contents.contains("failed to merge project"));
    assert!(!contents.contains('\x1b'), "transcript contains ANSI escapes");
}
