//! User-facing console output.
//!
//! Log lines are handled by `tracing`; this module prints the run banner
//! and the final per-project summary.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::output::{OutputFormatter, display_run_report};
//! # use pdfmerger::orchestrator::RunReport;
//!
//! # fn example(report: &RunReport) {
//! let formatter = OutputFormatter::new(false, false);
//! display_run_report(&formatter, report);
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter, format_file_size};

use crate::config::Config;
use crate::orchestrator::{ProjectOutcome, ProjectStatus, RunReport};

/// Create an output formatter from configuration.
pub fn create_formatter(config: &Config) -> OutputFormatter {
    OutputFormatter::new(config.quiet, config.debug)
}

/// Print the directories and modes of a run before it starts.
pub fn display_run_header(formatter: &OutputFormatter, config: &Config) {
    formatter.info(&format!(
        "Merging projects from {} into {}",
        config.input_dir.display(),
        config.output_dir.display()
    ));
    if config.dry_run {
        formatter.info("Dry run: nothing will be written");
    }
    formatter.detail("Splice mode", &format!("{:?}", config.splice));
    formatter.detail("Validation", &format!("{:?}", config.validation));
    formatter.detail("Compression", &format!("{:?}", config.compression));
}

/// Print one line per project followed by totals.
pub fn display_run_report(formatter: &OutputFormatter, report: &RunReport) {
    if report.outcomes.is_empty() {
        formatter.warning("No projects found");
        return;
    }

    formatter.section("Projects");
    for outcome in &report.outcomes {
        display_outcome(formatter, outcome);
    }
    formatter.blank_line();

    if report.dry_run {
        formatter.info(&format!("Planned {} project(s)", report.planned()));
        return;
    }

    let summary = format!(
        "Merged {} of {} project(s)",
        report.succeeded(),
        report.outcomes.len()
    );
    if report.failed() > 0 {
        formatter.warning(&format!("{summary}, {} failed", report.failed()));
    } else {
        formatter.success(&summary);
    }
}

fn display_outcome(formatter: &OutputFormatter, outcome: &ProjectOutcome) {
    let output = outcome.output.display();

    match &outcome.status {
        ProjectStatus::Merged => {
            let detail = outcome
                .statistics
                .as_ref()
                .map(|stats| {
                    format!(
                        " ({} files, {} pages, {})",
                        stats.files_merged,
                        stats.total_pages,
                        format_file_size(stats.output_size)
                    )
                })
                .unwrap_or_default();
            formatter.success(&format!("{output}{detail}"));
            if let Some(stats) = &outcome.statistics {
                formatter.debug(&format!(
                    "read {} of input in {:.2?}",
                    format_file_size(stats.input_size),
                    stats.merge_time
                ));
            }
        }
        ProjectStatus::MergeFailed(reason) => {
            formatter.error(&format!("{}: merge failed: {reason}", outcome.project));
        }
        ProjectStatus::ValidationFailed(reason) => {
            formatter.error(&format!("{output}: validation failed: {reason}"));
        }
        ProjectStatus::Planned => {
            formatter.info(&format!("{} -> {output}", outcome.project));
            for (idx, file) in outcome.files.iter().enumerate() {
                formatter.list_item(idx + 1, &file.display().to_string());
            }
        }
    }
}
