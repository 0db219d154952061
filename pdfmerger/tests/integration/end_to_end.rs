//! Full runs against real PDF files.

use pdfmerger::config::{CompressionLevel, SpliceMode, ValidationMode};
use pdfmerger::engine::LopdfEngine;
use pdfmerger::orchestrator::{self, ProjectStatus};

use crate::common::{Workspace, names, page_markers};

#[tokio::test]
async fn test_merges_every_project() {
    let ws = Workspace::new();
    ws.page("ALPHA-1.pdf", 1);
    ws.page("ALPHA-2.pdf", 2);
    ws.page("BETA-1.pdf", 10);
    ws.page("Solo.pdf", 20);

    let config = ws.config();
    let report = orchestrator::run(&config, &LopdfEngine::from_config(&config))
        .await
        .unwrap();

    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.failed(), 0);
    assert_eq!(
        report
            .outcomes
            .iter()
            .map(|o| o.project.as_str())
            .collect::<Vec<_>>(),
        vec!["ALPHA", "BETA", "Solo"]
    );

    assert_eq!(page_markers(&ws.merged("ALPHA")), vec![1, 2]);
    assert_eq!(page_markers(&ws.merged("BETA")), vec![10]);
    assert_eq!(page_markers(&ws.merged("Solo")), vec![20]);

    let alpha = &report.outcomes[0];
    let stats = alpha.statistics.as_ref().unwrap();
    assert_eq!(stats.files_merged, 2);
    assert_eq!(stats.total_pages, 2);
}

#[tokio::test]
async fn test_signature_pages_follow_their_anchor() {
    let ws = Workspace::new();
    ws.page("A-B.pdf", 1);
    ws.page("A-C.pdf", 2);
    ws.signature("addenda/signature-B.pdf", 9);

    let config = ws.config();
    let report = orchestrator::run(&config, &LopdfEngine::from_config(&config))
        .await
        .unwrap();

    assert_eq!(report.signature_keys, 1);
    assert_eq!(
        names(&report.outcomes[0].files),
        vec!["A-B.pdf", "signature-B.pdf", "A-C.pdf"]
    );
    assert_eq!(page_markers(&ws.merged("A")), vec![1, 9, 2]);
}

#[tokio::test]
async fn test_base_order_is_lexicographic() {
    let ws = Workspace::new();
    ws.page("P-2.pdf", 2);
    ws.page("P-10.pdf", 10);
    ws.page("P-1.pdf", 1);

    let config = ws.config();
    orchestrator::run(&config, &LopdfEngine::from_config(&config))
        .await
        .unwrap();

    assert_eq!(page_markers(&ws.merged("P")), vec![1, 10, 2]);
}

#[tokio::test]
async fn test_legacy_splice_reaches_every_anchor() {
    let ws = Workspace::new();
    ws.page("A-B.pdf", 1);
    ws.page("A-C.pdf", 2);
    ws.signature("signature-B.pdf", 8);
    ws.signature("signature-C.pdf", 9);

    let mut config = ws.config();
    config.splice = SpliceMode::Legacy;
    orchestrator::run(&config, &LopdfEngine::from_config(&config))
        .await
        .unwrap();
    assert_eq!(page_markers(&ws.merged("A")), vec![1, 8, 2, 9]);

    config.splice = SpliceMode::Anchored;
    orchestrator::run(&config, &LopdfEngine::from_config(&config))
        .await
        .unwrap();
    assert_eq!(page_markers(&ws.merged("A")), vec![1, 8, 2, 9]);
}

#[tokio::test]
async fn test_runs_are_deterministic() {
    let ws = Workspace::new();
    ws.page("A-C.pdf", 3);
    ws.page("A-B.pdf", 2);
    ws.page("A-A.pdf", 1);
    ws.signature("x/signature-C.pdf", 7);
    ws.signature("y/signature-C.pdf", 8);

    let config = ws.config();
    let engine = LopdfEngine::from_config(&config);

    let first = orchestrator::run(&config, &engine).await.unwrap();
    let first_markers = page_markers(&ws.merged("A"));
    let second = orchestrator::run(&config, &engine).await.unwrap();

    assert_eq!(first.outcomes[0].files, second.outcomes[0].files);
    assert_eq!(page_markers(&ws.merged("A")), first_markers);
    assert_eq!(first_markers, vec![1, 2, 3, 7, 8]);
}

#[tokio::test]
async fn test_strict_validation_and_compression_levels() {
    for compression in [
        CompressionLevel::None,
        CompressionLevel::Standard,
        CompressionLevel::Maximum,
    ] {
        let ws = Workspace::new();
        ws.page("A-1.pdf", 1);
        ws.page("A-2.pdf", 2);
        ws.page("A-3.pdf", 3);

        let mut config = ws.config();
        config.compression = compression;
        config.validation = ValidationMode::Strict;

        let report = orchestrator::run(&config, &LopdfEngine::from_config(&config))
            .await
            .unwrap();

        assert_eq!(report.outcomes[0].status, ProjectStatus::Merged);
        assert_eq!(page_markers(&ws.merged("A")), vec![1, 2, 3]);
    }
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let ws = Workspace::new();
    ws.page("A-1.pdf", 1);
    ws.page("A-2.pdf", 2);

    let mut config = ws.config();
    config.dry_run = true;

    let report = orchestrator::run(&config, &LopdfEngine::from_config(&config))
        .await
        .unwrap();

    assert_eq!(report.planned(), 1);
    assert!(!ws.merged("A").exists());
    assert!(!config.transcript_path().exists());
    assert_eq!(names(&report.outcomes[0].files), vec!["A-1.pdf", "A-2.pdf"]);
}
