//! Episode numbering and title naming.
//!
//! Titles follow `"<title> S0<season>E<NNN>"`. The season is always prefixed
//! with a literal `0` rather than padded, so season 12 renders as `S012`.
//! Episode numbers are 1-based and left-filled with `0` to three characters.
//!
//! Season and offset are signed: a negative offset moves numbering below 1
//! (offset -1 starts at `E000`). The fill is applied to the rendered number,
//! sign included, so episode -1 renders as `E0-1` and season -2 as `S0-2`.

use serde::Serialize;
use std::fmt;

use crate::media::Container;

/// Width of the zero-filled episode number.
pub const EPISODE_DIGITS: usize = 3;

/// Numbering parameters shared by every file of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeNumbering {
    season: i64,
    offset: i64,
    file_count: usize,
}

impl EpisodeNumbering {
    pub fn new(season: i64, offset: i64, file_count: usize) -> Self {
        Self {
            season,
            offset,
            file_count,
        }
    }

    /// Index of the file at `position`, shifted by the offset.
    pub fn offset_index(&self, position: usize) -> i64 {
        to_i64(position).saturating_add(self.offset)
    }

    /// One-based episode number; also the `PART_NUMBER` tag value.
    pub fn episode_number(&self, position: usize) -> i64 {
        self.offset_index(position).saturating_add(1)
    }

    /// Value of the `TOTAL_PARTS` tag.
    pub fn total_parts(&self) -> i64 {
        to_i64(self.file_count).saturating_add(self.offset)
    }

    /// Derive the display title for the file at `position`.
    pub fn title(&self, base: &str, position: usize) -> EpisodeTitle {
        let episode = self.episode_number(position).to_string();
        EpisodeTitle(format!(
            "{base} S0{season}E{episode:0>width$}",
            season = self.season,
            width = EPISODE_DIGITS,
        ))
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// A fully derived episode title such as `Show S01E003`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EpisodeTitle(String);

impl EpisodeTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file name the episode is renamed to.
    pub fn file_name(&self, container: Container) -> String {
        container.file_name(&self.0)
    }
}

impl fmt::Display for EpisodeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EpisodeTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse the leading decimal integer of `input`, ignoring anything after it.
///
/// Leading whitespace and a single sign are accepted (`" 12abc"` → 12,
/// `"-3x"` → -3). Returns `None` when no digits lead the string or the value
/// overflows `i64`.
pub fn parse_leading_i64(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'-' | b'+') => 1,
        _ => 0,
    };

    let digits = &trimmed[sign_len..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    trimmed[..sign_len + end].parse().ok()
}
