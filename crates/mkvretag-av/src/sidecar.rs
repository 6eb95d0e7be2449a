//! Temporary tag files placed next to the media being edited.
//!
//! A [`SidecarFile`] is created in the target directory, handed to
//! mkvpropedit, and removed again. Removal happens explicitly through
//! [`SidecarFile::remove`] so failures can be reported, and implicitly on drop
//! so an early return or a panicking task never leaves the file behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use mkvretag_core::{Error, Result};

/// A tag document written to disk for the lifetime of one edit.
#[derive(Debug)]
pub struct SidecarFile {
    file: NamedTempFile,
}

impl SidecarFile {
    /// Write `contents` to a new `tags<index>-XXXXXX.xml` file in `dir`.
    ///
    /// The index keeps names readable and distinct within a batch; the random
    /// suffix keeps concurrent runs in the same directory apart.
    pub async fn create(dir: &Path, index: i64, contents: String) -> Result<Self> {
        let dir = dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::create_blocking(&dir, index, &contents))
            .await
            .map_err(|e| Error::Internal(format!("sidecar writer task failed: {e}")))?
    }

    fn create_blocking(dir: &Path, index: i64, contents: &str) -> Result<Self> {
        let prefix = format!("tags{index}-");
        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".xml")
            .tempfile_in(dir)
            .map_err(|e| {
                Error::sidecar(
                    dir.join(format!("{prefix}*.xml")),
                    format!("failed to create: {e}"),
                )
            })?;

        let written = file
            .write_all(contents.as_bytes())
            .and_then(|()| file.flush());
        if let Err(e) = written {
            return Err(Error::sidecar(file.path(), format!("failed to write: {e}")));
        }

        Ok(Self { file })
    }

    /// Location of the sidecar on disk.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the sidecar, reporting any failure.
    pub async fn remove(self) -> Result<()> {
        let path: PathBuf = self.file.path().to_path_buf();
        let file = self.file;
        tokio::task::spawn_blocking(move || file.close())
            .await
            .map_err(|e| Error::Internal(format!("sidecar removal task failed: {e}")))?
            .map_err(|e| Error::sidecar(path, format!("failed to delete: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn create_writes_contents_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sidecar = SidecarFile::create(dir.path(), 4, "<Tags/>".to_string())
            .await
            .unwrap();

        assert_eq!(sidecar.path().parent(), Some(dir.path()));
        let name = sidecar.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("tags4-"), "unexpected name {name}");
        assert!(name.ends_with(".xml"), "unexpected name {name}");
        assert_eq!(fs::read_to_string(sidecar.path()).unwrap(), "<Tags/>");
    }

    #[tokio::test]
    async fn remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sidecar = SidecarFile::create(dir.path(), 0, "x".to_string())
            .await
            .unwrap();
        let path = sidecar.path().to_path_buf();

        sidecar.remove().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn remove_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sidecar = SidecarFile::create(dir.path(), 2, "x".to_string())
            .await
            .unwrap();
        fs::remove_file(sidecar.path()).unwrap();

        let err = sidecar.remove().await.unwrap_err();
        assert!(matches!(err, Error::Sidecar { .. }));
        assert!(err.to_string().contains("failed to delete"));
    }

    #[tokio::test]
    async fn negative_index_in_name() {
        let dir = tempfile::tempdir().unwrap();
        let sidecar = SidecarFile::create(dir.path(), -1, "x".to_string())
            .await
            .unwrap();
        let name = sidecar.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("tags-1-"), "unexpected name {name}");
    }

    #[tokio::test]
    async fn drop_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = {
            let sidecar = SidecarFile::create(dir.path(), 1, "x".to_string())
                .await
                .unwrap();
            sidecar.path().to_path_buf()
        };
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn same_index_does_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let a = SidecarFile::create(dir.path(), 7, "a".to_string()).await.unwrap();
        let b = SidecarFile::create(dir.path(), 7, "b".to_string()).await.unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[tokio::test]
    async fn create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = SidecarFile::create(&missing, 0, "x".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Sidecar { .. }));
        assert!(err.to_string().contains("failed to create"));
    }
}
