//! Per-file planning: titles, tags and rename targets.

use mkvretag_av::TagDocument;
use mkvretag_core::{Container, EpisodeTitle, JobInput};

use crate::scan::FileSet;

/// What the rename step will do for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameDecision {
    /// The target name is free; rename.
    Rename,
    /// The file already carries its target name.
    AlreadyNamed,
    /// Another file of the original listing already has the target name.
    Conflict,
}

/// Everything derived for a single file before any work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodePlan {
    /// Index in the sorted file listing.
    pub position: usize,
    /// `position` shifted by the episodes offset.
    pub offset_index: i64,
    pub file_name: String,
    pub title: EpisodeTitle,
    pub new_file_name: String,
    pub tags: TagDocument,
}

impl EpisodePlan {
    /// Decide the rename against the names present before the batch started.
    ///
    /// Checking the original listing (not the live directory) keeps the
    /// decision independent of how far other tasks have progressed.
    pub fn rename_decision(&self, originals: &FileSet) -> RenameDecision {
        if !originals.contains(&self.new_file_name) {
            RenameDecision::Rename
        } else if self.file_name == self.new_file_name {
            RenameDecision::AlreadyNamed
        } else {
            RenameDecision::Conflict
        }
    }
}

/// The full plan for one directory.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub files: FileSet,
    pub episodes: Vec<EpisodePlan>,
}

impl BatchPlan {
    pub fn new(job: &JobInput, files: FileSet) -> Self {
        let numbering = job.numbering(files.len());
        let container = Container::Mkv;

        let episodes = files
            .names()
            .iter()
            .enumerate()
            .map(|(position, file_name)| {
                let title = numbering.title(&job.title, position);
                EpisodePlan {
                    position,
                    offset_index: numbering.offset_index(position),
                    file_name: file_name.clone(),
                    new_file_name: title.file_name(container),
                    title,
                    tags: TagDocument::new(
                        job.studio.clone(),
                        numbering.episode_number(position),
                        numbering.total_parts(),
                    ),
                }
            })
            .collect();

        Self { files, episodes }
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(season: &str, offset: &str) -> JobInput {
        JobInput::from_args("/media/show", "Show", "Studio", Some(season), Some(offset)).unwrap()
    }

    fn files(names: &[&str]) -> FileSet {
        FileSet::new("/media/show", names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn plans_two_files() {
        let plan = BatchPlan::new(&job("1", "0"), files(&["b.mkv", "a.mkv"]));
        assert_eq!(plan.len(), 2);

        let first = &plan.episodes[0];
        assert_eq!(first.file_name, "a.mkv");
        assert_eq!(first.title.as_str(), "Show S01E001");
        assert_eq!(first.new_file_name, "Show S01E001.mkv");
        assert_eq!(first.tags, TagDocument::new("Studio", 1, 2));

        let second = &plan.episodes[1];
        assert_eq!(second.file_name, "b.mkv");
        assert_eq!(second.new_file_name, "Show S01E002.mkv");
        assert_eq!(second.tags, TagDocument::new("Studio", 2, 2));
    }

    #[test]
    fn offset_applies_to_titles_and_tags() {
        let plan = BatchPlan::new(&job("3", "10"), files(&["x.mkv", "y.mkv", "z.mkv"]));
        let last = &plan.episodes[2];
        assert_eq!(last.offset_index, 12);
        assert_eq!(last.title.as_str(), "Show S03E013");
        assert_eq!(last.tags.part_number, 13);
        assert_eq!(last.tags.total_parts, 13);
    }

    #[test]
    fn rename_decisions() {
        let originals = files(&["Show S01E002.mkv", "a.mkv", "Show S01E001.mkv"]);
        let plan = BatchPlan::new(&job("1", "0"), originals.clone());

        // Sorted: "Show S01E001.mkv", "Show S01E002.mkv", "a.mkv"
        assert_eq!(
            plan.episodes[0].rename_decision(&originals),
            RenameDecision::AlreadyNamed
        );
        assert_eq!(
            plan.episodes[1].rename_decision(&originals),
            RenameDecision::AlreadyNamed
        );
        assert_eq!(
            plan.episodes[2].rename_decision(&originals),
            RenameDecision::Rename
        );
    }

    #[test]
    fn conflict_when_target_belongs_to_another_file() {
        // With offset 1, "Show S01E001.mkv" (position 0) targets E002, which
        // is another original file.
        let originals = files(&["Show S01E001.mkv", "Show S01E002.mkv"]);
        let plan = BatchPlan::new(&job("1", "1"), originals.clone());

        assert_eq!(plan.episodes[0].new_file_name, "Show S01E002.mkv");
        assert_eq!(
            plan.episodes[0].rename_decision(&originals),
            RenameDecision::Conflict
        );
        assert_eq!(plan.episodes[1].new_file_name, "Show S01E003.mkv");
        assert_eq!(
            plan.episodes[1].rename_decision(&originals),
            RenameDecision::Rename
        );
    }

    #[test]
    fn empty_file_set_yields_empty_plan() {
        let plan = BatchPlan::new(&job("1", "0"), files(&[]));
        assert!(plan.is_empty());
    }
}
