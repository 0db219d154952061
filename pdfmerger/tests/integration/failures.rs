//! Per-project failures and fatal errors.

use pdfmerger::MergerError;
use pdfmerger::engine::LopdfEngine;
use pdfmerger::orchestrator::{self, ProjectStatus};
use pdfmerger::{Config, config::resolve_directories};

use crate::common::{Workspace, page_markers};

#[tokio::test]
async fn test_broken_project_does_not_stop_the_run() {
    let ws = Workspace::new();
    ws.garbage("A-1.pdf");
    ws.page("A-2.pdf", 2);
    ws.page("B-1.pdf", 1);

    let config = ws.config();
    let engine = LopdfEngine::from_config(&config);
    let report = orchestrator::run(&config, &engine).await.unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(report.succeeded(), 1);

    let failed = &report.outcomes[0];
    assert_eq!(failed.project, "A");
    match &failed.status {
        ProjectStatus::MergeFailed(reason) => assert!(reason.contains("A-1.pdf")),
        other => panic!("unexpected status: {other:?}"),
    }
    assert!(!ws.merged("A").exists());

    assert_eq!(report.outcomes[1].status, ProjectStatus::Merged);
    assert_eq!(page_markers(&ws.merged("B")), vec![1]);
}

#[tokio::test]
async fn test_missing_input_directory_is_fatal() {
    let ws = Workspace::new();
    let config = Config::new(ws.input.join("missing"), &ws.output);

    let err = orchestrator::run(&config, &LopdfEngine::default())
        .await
        .unwrap_err();

    assert!(matches!(err, MergerError::Scan { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_missing_output_directory_means_no_signatures() {
    let ws = Workspace::new();
    ws.page("A-B.pdf", 1);

    let mut config = ws.config();
    config.output_dir = ws.output.join("not-created");
    config.dry_run = true;

    let report = orchestrator::run(&config, &LopdfEngine::default())
        .await
        .unwrap();

    assert_eq!(report.signature_keys, 0);
    assert_eq!(report.outcomes[0].files.len(), 1);
}

#[tokio::test]
async fn test_empty_input_directory() {
    let ws = Workspace::new();
    let config = ws.config();

    let report = orchestrator::run(&config, &LopdfEngine::from_config(&config))
        .await
        .unwrap();

    assert!(report.outcomes.is_empty());
    assert_eq!(report.failed(), 0);
}

#[test]
fn test_directory_resolution_errors() {
    let err = resolve_directories(None, None, &["just-one".to_string()]).unwrap_err();
    assert!(matches!(err, MergerError::InvalidConfig { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!err.is_per_project());
}
