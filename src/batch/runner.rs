//! Concurrent execution of a [`BatchPlan`].
//!
//! Every file gets its own task in a [`JoinSet`]; tasks share only read-only
//! context. Each task always runs title, tags and rename in that order and
//! reports a [`FileOutcome`]; a failing step never stops the remaining steps
//! or other tasks.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, info, warn};

use mkvretag_av::{actions, TagEditor};

use super::plan::{BatchPlan, EpisodePlan, RenameDecision};
use super::report::{BatchReport, FileOutcome, RenameOutcome, StepStatus};
use crate::scan::FileSet;

/// Runs the per-file pipelines of a batch.
pub struct BatchRunner {
    editor: Arc<dyn TagEditor>,
    dry_run: bool,
}

/// Read-only state shared by all tasks of one run.
struct TaskContext {
    editor: Arc<dyn TagEditor>,
    directory: PathBuf,
    originals: FileSet,
    dry_run: bool,
}

impl BatchRunner {
    pub fn new(editor: Arc<dyn TagEditor>) -> Self {
        Self {
            editor,
            dry_run: false,
        }
    }

    /// Plan and log every step without touching files or spawning tools.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Execute every episode concurrently and wait for all of them.
    pub async fn run(&self, plan: BatchPlan) -> BatchReport {
        let BatchPlan { files, episodes } = plan;
        let ctx = Arc::new(TaskContext {
            editor: Arc::clone(&self.editor),
            directory: files.directory().to_path_buf(),
            originals: files,
            dry_run: self.dry_run,
        });

        info!(
            "Processing {} files in {} with {}{}",
            episodes.len(),
            ctx.directory.display(),
            ctx.editor.name(),
            if ctx.dry_run { " (dry run)" } else { "" }
        );

        let mut tasks = JoinSet::new();
        for episode in episodes {
            let ctx = Arc::clone(&ctx);
            tasks.spawn(async move { process_episode(&ctx, episode).await });
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        let mut aborted = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    error!("Episode task failed: {e}");
                    aborted += 1;
                }
            }
        }

        BatchReport::from_outcomes(outcomes, aborted)
    }
}

async fn process_episode(ctx: &TaskContext, plan: EpisodePlan) -> FileOutcome {
    let source = ctx.directory.join(&plan.file_name);

    let (title_step, tags_step) = if ctx.dry_run {
        info!(
            "[DRY RUN] {}: title={:?}, ARTIST={:?}, PART_NUMBER={}, TOTAL_PARTS={}",
            plan.file_name,
            plan.title.as_str(),
            plan.tags.artist,
            plan.tags.part_number,
            plan.tags.total_parts
        );
        (StepStatus::Skipped, StepStatus::Skipped)
    } else {
        let editor = ctx.editor.as_ref();
        let title =
            actions::set_title(editor, &source, plan.title.as_str(), &plan.file_name).await;
        let tags = actions::embed_tags(
            editor,
            &ctx.directory,
            &source,
            &plan.tags,
            plan.offset_index,
            &plan.file_name,
        )
        .await;
        (StepStatus::from(&title), StepStatus::from(&tags))
    };

    let rename = rename_episode(ctx, &plan, source).await;

    FileOutcome {
        position: plan.position,
        file_name: plan.file_name,
        title: plan.title,
        title_step,
        tags_step,
        rename,
    }
}

async fn rename_episode(ctx: &TaskContext, plan: &EpisodePlan, source: PathBuf) -> RenameOutcome {
    let target = plan.new_file_name.clone();

    match plan.rename_decision(&ctx.originals) {
        RenameDecision::AlreadyNamed => RenameOutcome::AlreadyNamed,
        RenameDecision::Conflict => {
            warn!(
                "Couldn't rename {}, there already exists file with target name {target}",
                plan.file_name
            );
            RenameOutcome::Conflict { target }
        }
        RenameDecision::Rename if ctx.dry_run => {
            info!("[DRY RUN] Would rename {} to: {target}", plan.file_name);
            RenameOutcome::Planned { target }
        }
        RenameDecision::Rename => {
            match tokio::fs::rename(&source, ctx.directory.join(&target)).await {
                Ok(()) => {
                    info!("Renamed to: {target}");
                    RenameOutcome::Renamed { to: target }
                }
                Err(e) => {
                    error!("Error renaming {}: {e}", plan.file_name);
                    RenameOutcome::Failed {
                        target,
                        message: e.to_string(),
                    }
                }
            }
        }
    }
}
