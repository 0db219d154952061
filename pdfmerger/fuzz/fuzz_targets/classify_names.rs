#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfmerger::classify::{FileRecord, project_key_of, suffix_key_of};
use pdfmerger::config::SpliceMode;
use pdfmerger::order::build_merge_order;
use pdfmerger::signature::SignatureIndex;
use std::path::PathBuf;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    let names: Vec<&str> = s.lines().filter(|line| !line.contains('/')).collect();

    for name in &names {
        let project = project_key_of(name);
        assert!(name.starts_with(project));

        if let Some(suffix) = suffix_key_of(name) {
            assert!(!suffix.contains('-'));
        }
    }

    let files: Vec<PathBuf> = names
        .iter()
        .filter_map(|name| FileRecord::classify(*name))
        .map(|record| record.path)
        .collect();
    let index = SignatureIndex::from_paths(files.iter().cloned());

    // Splicing only ever adds files.
    for mode in [SpliceMode::Anchored, SpliceMode::Legacy] {
        let order = build_merge_order(&files, &index, mode);
        assert!(order.len() >= files.len());
    }
});
