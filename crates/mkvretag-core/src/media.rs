//! Container formats mkvretag knows how to tag.

use std::fmt;

/// Supported container formats.
///
/// Only Matroska is handled: `mkvpropedit` edits Matroska segment info and
/// tags in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Container {
    #[default]
    Mkv,
}

impl Container {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mkv => "mkv",
        }
    }

    /// Whether `file_name` carries this container's extension.
    ///
    /// The comparison is case-insensitive, so `EP1.MKV` matches.
    pub fn matches(&self, file_name: &str) -> bool {
        let ext = self.extension();
        let Some(split) = file_name.len().checked_sub(ext.len() + 1) else {
            return false;
        };
        if !file_name.is_char_boundary(split) {
            return false;
        }
        let (_, tail) = file_name.split_at(split);
        tail.starts_with('.') && tail[1..].eq_ignore_ascii_case(ext)
    }

    /// Append this container's extension to a file stem.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mkv => write!(f, "mkv"),
        }
    }
}
