//! Directory scanning.
//!
//! Lists the target directory once, keeps the files carrying the container
//! extension and sorts them by name so episode numbering does not depend on
//! the order the filesystem happens to return.

use std::path::{Path, PathBuf};

use mkvretag_core::{Container, Error, Result};
use tracing::{debug, warn};

/// The matching files of one directory, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    directory: PathBuf,
    names: Vec<String>,
}

impl FileSet {
    /// Build a set from names already known to match, sorting them.
    pub fn new(directory: impl Into<PathBuf>, mut names: Vec<String>) -> Self {
        names.sort();
        names.dedup();
        Self {
            directory: directory.into(),
            names,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }
}

/// List `directory` and collect the files matching `container`.
///
/// Subdirectories are skipped even when their names match. Entries whose
/// names are not valid UTF-8 cannot be titled and are skipped with a warning.
///
/// # Errors
///
/// Returns [`Error::ReadDir`] when the directory cannot be listed.
pub async fn scan_directory(directory: &Path, container: Container) -> Result<FileSet> {
    let mut entries = tokio::fs::read_dir(directory)
        .await
        .map_err(|e| Error::read_dir(directory, e))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::read_dir(directory, e))?
    {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("Skipping non UTF-8 file name {:?}", file_name);
            continue;
        };

        if !container.matches(name) {
            continue;
        }

        match entry.file_type().await {
            Ok(ft) if ft.is_dir() => {
                debug!("Skipping directory {name}");
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Skipping {name}: {e}");
                continue;
            }
        }

        names.push(name.to_string());
    }

    debug!(
        "Found {} .{} files in {}",
        names.len(),
        container.extension(),
        directory.display()
    );
    Ok(FileSet::new(directory, names))
}
