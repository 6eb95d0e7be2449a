//! Batch processing of one directory.
//!
//! [`BatchPlan`] derives every file's title, tags and target name up front;
//! [`BatchRunner`] executes the plan with one task per file and folds the
//! per-file [`FileOutcome`]s into a [`BatchReport`].

pub mod plan;
pub mod report;
pub mod runner;

pub use plan::{BatchPlan, EpisodePlan, RenameDecision};
pub use report::{BatchReport, FileOutcome, RenameOutcome, StepStatus};
pub use runner::BatchRunner;
