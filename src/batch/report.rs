//! Per-file outcomes and the batch summary folded from them.

use serde::Serialize;
use tracing::{info, warn};

use mkvretag_core::EpisodeTitle;

/// Result of one best-effort editing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    Ok,
    Failed { message: String },
    /// Not attempted (dry run).
    Skipped,
}

impl StepStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl<T> From<&mkvretag_core::Result<T>> for StepStatus {
    fn from(result: &mkvretag_core::Result<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }
}

/// What happened to a file's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    Renamed { to: String },
    /// The file already had its target name.
    AlreadyNamed,
    /// Another original file holds the target name; the rename was skipped.
    Conflict { target: String },
    Failed { target: String, message: String },
    /// Dry run: the rename would have happened.
    Planned { target: String },
}

/// Everything that happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub position: usize,
    pub file_name: String,
    pub title: EpisodeTitle,
    pub title_step: StepStatus,
    pub tags_step: StepStatus,
    pub rename: RenameOutcome,
}

/// Summary of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Outcomes ordered by position.
    pub files: Vec<FileOutcome>,
    pub renamed: usize,
    pub unchanged: usize,
    pub conflicts: usize,
    pub rename_failures: usize,
    /// Title or tag steps that failed.
    pub tool_failures: usize,
    /// Tasks that panicked or were cancelled before producing an outcome.
    pub aborted_tasks: usize,
}

impl BatchReport {
    /// Fold task outcomes into a report.
    pub fn from_outcomes(mut files: Vec<FileOutcome>, aborted_tasks: usize) -> Self {
        files.sort_by_key(|f| f.position);

        let mut report = Self {
            aborted_tasks,
            ..Self::default()
        };
        for file in &files {
            match file.rename {
                RenameOutcome::Renamed { .. } | RenameOutcome::Planned { .. } => {
                    report.renamed += 1
                }
                RenameOutcome::AlreadyNamed => report.unchanged += 1,
                RenameOutcome::Conflict { .. } => report.conflicts += 1,
                RenameOutcome::Failed { .. } => report.rename_failures += 1,
            }
            report.tool_failures += [&file.title_step, &file.tags_step]
                .iter()
                .filter(|s| s.is_failed())
                .count();
        }
        report.files = files;
        report
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflicts > 0
    }

    /// Log the end-of-run summary, including the re-run hint on conflicts.
    pub fn log_summary(&self) {
        info!(
            "Processed {} files: {} renamed, {} unchanged, {} conflicts, {} rename failures, {} tool failures",
            self.files.len(),
            self.renamed,
            self.unchanged,
            self.conflicts,
            self.rename_failures,
            self.tool_failures
        );
        if self.aborted_tasks > 0 {
            warn!("{} file tasks aborted before finishing", self.aborted_tasks);
        }
        if self.has_conflicts() {
            warn!(
                "Rename conflicts occurred ({})! If you used an episodes offset, run mkvretag again a couple of times; conflicts should decrease to 0",
                self.conflicts
            );
        }
    }
}
