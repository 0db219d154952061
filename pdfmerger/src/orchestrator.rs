//! Run orchestration.
//!
//! A run indexes the signature files of the output tree, groups the input
//! files into projects and then processes the projects one at a time in
//! sorted key order. A project that fails to merge or validate is logged
//! and recorded; the remaining projects still run. Errors that are not
//! about a single project (see [`MergerError::is_per_project`]) end the run.
//!
//! [`MergerError::is_per_project`]: crate::error::MergerError::is_per_project

use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::engine::{MergeStatistics, PdfEngine};
use crate::error::Result;
use crate::order::build_merge_order;
use crate::project::ProjectSet;
use crate::signature::SignatureIndex;

/// Files to merge into one project's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePlan {
    /// Project key.
    pub project: String,

    /// Merged output file.
    pub output: PathBuf,

    /// Final merge order.
    pub files: Vec<PathBuf>,
}

/// What happened to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "camelCase")]
pub enum ProjectStatus {
    /// Merged and validated.
    Merged,
    /// The engine could not produce the output file.
    MergeFailed(String),
    /// The output file was written but did not validate.
    ValidationFailed(String),
    /// Dry run; nothing was written.
    Planned,
}

impl ProjectStatus {
    /// Whether the project ended in a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::MergeFailed(_) | Self::ValidationFailed(_))
    }
}

/// Outcome of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutcome {
    /// Project key.
    pub project: String,

    /// Merged output file.
    pub output: PathBuf,

    /// Merge order handed to the engine.
    pub files: Vec<PathBuf>,

    /// Final status.
    #[serde(flatten)]
    pub status: ProjectStatus,

    /// Merge statistics, when the merge step succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<MergeStatistics>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Directory the projects were read from.
    pub input_dir: PathBuf,

    /// Directory the merged files were written to.
    pub output_dir: PathBuf,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Number of distinct suffix keys with signature files.
    pub signature_keys: usize,

    /// Per project outcomes, in processing order.
    pub outcomes: Vec<ProjectOutcome>,
}

impl RunReport {
    /// Number of projects merged and validated.
    pub fn succeeded(&self) -> usize {
        self.count(|status| *status == ProjectStatus::Merged)
    }

    /// Number of projects that failed.
    pub fn failed(&self) -> usize {
        self.count(ProjectStatus::is_failure)
    }

    /// Number of projects only planned.
    pub fn planned(&self) -> usize {
        self.count(|status| *status == ProjectStatus::Planned)
    }

    /// Outcomes that ended in a failure.
    pub fn failures(&self) -> impl Iterator<Item = &ProjectOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_failure())
    }

    fn count(&self, pred: impl Fn(&ProjectStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Merge plans for every project, in sorted key order.
pub fn plan_merges(projects: &ProjectSet, index: &SignatureIndex, config: &Config) -> Vec<MergePlan> {
    projects
        .iter()
        .map(|(key, files)| MergePlan {
            project: key.to_string(),
            output: config.output_path_for(key),
            files: build_merge_order(files, index, config.splice),
        })
        .collect()
}

/// Run every project of `config` through `engine`.
///
/// # Errors
///
/// Configuration and scanning errors are fatal, and so is any engine error
/// that is not about a single project. Per project merge and validation
/// errors are recorded in the returned report.
pub async fn run<E: PdfEngine>(config: &Config, engine: &E) -> Result<RunReport> {
    config.validate()?;

    let index = SignatureIndex::build(&config.output_dir)?;
    let projects = ProjectSet::build(&config.input_dir)?;

    if projects.is_empty() {
        tracing::warn!(directory = %config.input_dir.display(), "no pdf files to merge");
    }

    let plans = plan_merges(&projects, &index, config);
    let mut outcomes = Vec::with_capacity(plans.len());

    for plan in plans {
        outcomes.push(execute_plan(plan, engine, config.dry_run).await?);
    }

    Ok(RunReport {
        input_dir: config.input_dir.clone(),
        output_dir: config.output_dir.clone(),
        dry_run: config.dry_run,
        signature_keys: index.len(),
        outcomes,
    })
}

/// Merge and validate one project.
///
/// # Errors
///
/// Returns engine errors for which
/// [`is_per_project`](crate::error::MergerError::is_per_project) is false. All other failures end up in the outcome's status.
pub async fn execute_plan<E: PdfEngine>(
    plan: MergePlan,
    engine: &E,
    dry_run: bool,
) -> Result<ProjectOutcome> {
    tracing::info!("order of merging into project {}:", plan.project);
    for file in &plan.files {
        tracing::info!("{}", file.display());
    }

    let (status, statistics) = if dry_run {
        (ProjectStatus::Planned, None)
    } else {
        merge_and_validate(&plan, engine).await?
    };

    Ok(ProjectOutcome {
        project: plan.project,
        output: plan.output,
        files: plan.files,
        status,
        statistics,
    })
}

async fn merge_and_validate<E: PdfEngine>(
    plan: &MergePlan,
    engine: &E,
) -> Result<(ProjectStatus, Option<MergeStatistics>)> {
    let statistics = match engine.merge(&plan.files, &plan.output).await {
        Ok(statistics) => statistics,
        Err(err) if !err.is_per_project() => return Err(err),
        Err(err) => {
            tracing::warn!(project = %plan.project, error = %err, "failed to merge project");
            return Ok((ProjectStatus::MergeFailed(err.to_string()), None));
        }
    };

    if let Err(err) = engine.validate(&plan.output).await {
        if !err.is_per_project() {
            return Err(err);
        }
        tracing::warn!(
            project = %plan.project,
            output = %plan.output.display(),
            error = %err,
            "merged file failed validation"
        );
        return Ok((ProjectStatus::ValidationFailed(err.to_string()), Some(statistics)));
    }

    tracing::info!(
        project = %plan.project,
        output = %plan.output.display(),
        pages = statistics.total_pages,
        "merged project"
    );
    Ok((ProjectStatus::Merged, Some(statistics)))
}
