//! The job description for one mkvretag run.

use std::path::{self, PathBuf};

use crate::episode::{parse_leading_i64, EpisodeNumbering};
use crate::error::{Error, Result};

/// Season used when none (or an unparsable one) is given.
pub const DEFAULT_SEASON: i64 = 1;

/// Episode offset used when none (or an unparsable one) is given.
pub const DEFAULT_EPISODES_OFFSET: i64 = 0;

/// Everything the batch needs to know about one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInput {
    /// Directory holding the files to retag.
    pub directory: PathBuf,
    /// Base title, e.g. the show name.
    pub title: String,
    /// Written to the `ARTIST` tag.
    pub studio: String,
    pub season: i64,
    /// Shift applied to every episode index, for continuing numbering
    /// across batches. May be negative.
    pub episodes_offset: i64,
}

impl JobInput {
    /// Build a job from raw argument values.
    ///
    /// `season` and `episodes_offset` are parsed from their leading digits
    /// (sign included) and fall back to [`DEFAULT_SEASON`] and
    /// [`DEFAULT_EPISODES_OFFSET`] only when absent or unparsable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the directory, title or studio is
    /// empty, or when the title contains a path separator.
    pub fn from_args(
        directory: impl Into<PathBuf>,
        title: impl Into<String>,
        studio: impl Into<String>,
        season: Option<&str>,
        episodes_offset: Option<&str>,
    ) -> Result<Self> {
        let job = Self {
            directory: directory.into(),
            title: title.into(),
            studio: studio.into(),
            season: season
                .and_then(parse_leading_i64)
                .unwrap_or(DEFAULT_SEASON),
            episodes_offset: episodes_offset
                .and_then(parse_leading_i64)
                .unwrap_or(DEFAULT_EPISODES_OFFSET),
        };
        job.validate()?;
        Ok(job)
    }

    /// Check that all required fields are present.
    pub fn validate(&self) -> Result<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(Error::Validation("directory path is required".into()));
        }
        if self.title.is_empty() {
            return Err(Error::Validation("title is required".into()));
        }
        // Titles become file names inside `directory`.
        if self.title.chars().any(path::is_separator) {
            return Err(Error::Validation(format!(
                "title must not contain a path separator: {:?}",
                self.title
            )));
        }
        if self.studio.is_empty() {
            return Err(Error::Validation("studio is required".into()));
        }
        Ok(())
    }

    /// Numbering parameters for a batch of `file_count` files.
    pub fn numbering(&self, file_count: usize) -> EpisodeNumbering {
        EpisodeNumbering::new(self.season, self.episodes_offset, file_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_optional_args_missing() {
        let job = JobInput::from_args("/media/show", "Show", "Studio", None, None).unwrap();
        assert_eq!(job.season, DEFAULT_SEASON);
        assert_eq!(job.episodes_offset, DEFAULT_EPISODES_OFFSET);
    }

    #[test]
    fn defaults_when_optional_args_unparsable() {
        let job = JobInput::from_args(
            "/media/show",
            "Show",
            "Studio",
            Some("first"),
            Some("none"),
        )
        .unwrap();
        assert_eq!(job.season, 1);
        assert_eq!(job.episodes_offset, 0);
    }

    #[test]
    fn parses_optional_args() {
        let job =
            JobInput::from_args("/media/show", "Show", "Studio", Some("3"), Some("12")).unwrap();
        assert_eq!(job.season, 3);
        assert_eq!(job.episodes_offset, 12);

        let numbering = job.numbering(4);
        assert_eq!(numbering.total_parts(), 16);
        assert_eq!(numbering.title(&job.title, 0).as_str(), "Show S03E013");
    }

    #[test]
    fn keeps_explicit_negative_values() {
        let job =
            JobInput::from_args("/media/show", "Show", "Studio", Some("-2"), Some("-1")).unwrap();
        assert_eq!(job.season, -2);
        assert_eq!(job.episodes_offset, -1);

        let numbering = job.numbering(3);
        assert_eq!(numbering.total_parts(), 2);
        assert_eq!(numbering.title(&job.title, 0).as_str(), "Show S0-2E000");
        assert_eq!(numbering.title(&job.title, 1).as_str(), "Show S0-2E001");
    }

    #[test]
    fn rejects_path_separator_in_title() {
        let err = JobInput::from_args("/media", "Show/Extras", "Studio", None, None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("path separator"));

        assert!(JobInput::from_args("/media", "AC/DC Live", "Studio", None, None).is_err());
        assert!(JobInput::from_args("/media", "Show: Part 1", "Studio", None, None).is_ok());
    }

    #[test]
    fn rejects_empty_required_fields() {
        let err = JobInput::from_args("", "Show", "Studio", None, None).unwrap_err();
        assert!(err.to_string().contains("directory"));

        let err = JobInput::from_args("/media", "", "Studio", None, None).unwrap_err();
        assert!(err.to_string().contains("title"));

        let err = JobInput::from_args("/media", "Show", "", None, None).unwrap_err();
        assert!(err.to_string().contains("studio"));
    }
}
