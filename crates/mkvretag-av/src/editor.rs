//! The [`TagEditor`] trait abstracts the tool that edits containers in place.
//!
//! [`Mkvpropedit`] is the production implementation; tests substitute a
//! recording fake so the batch logic runs without MKVToolNix installed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use mkvretag_core::Result;

use crate::command::ToolCommand;
use crate::tools::{ToolRegistry, MKVPROPEDIT};

/// Edits container metadata in place.
#[async_trait]
pub trait TagEditor: Send + Sync {
    /// Human-readable name of the editor implementation.
    fn name(&self) -> &'static str;

    /// Set the segment title shown by players.
    async fn set_title(&self, file: &Path, title: &str) -> Result<()>;

    /// Apply the tag document stored at `tags_file` as global tags.
    async fn apply_global_tags(&self, file: &Path, tags_file: &Path) -> Result<()>;
}

/// [`TagEditor`] backed by the `mkvpropedit` CLI.
#[derive(Debug, Clone)]
pub struct Mkvpropedit {
    path: PathBuf,
    timeout: Option<Duration>,
}

impl Mkvpropedit {
    pub fn new(path: PathBuf, timeout: Option<Duration>) -> Self {
        Self { path, timeout }
    }

    /// Use the discovered tool, or fall back to `fallback` (typically the
    /// configured path or the bare program name) when discovery failed.
    ///
    /// The fallback keeps the run going: each invocation then fails and is
    /// reported per file.
    pub fn from_registry(
        registry: &ToolRegistry,
        fallback: Option<&Path>,
        timeout: Option<Duration>,
    ) -> Self {
        match registry.require(MKVPROPEDIT) {
            Ok(tool) => Self::new(tool.path.clone(), tool.timeout),
            Err(e) => {
                tracing::warn!("{e}; edits will fail until it is available");
                let path = fallback
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(MKVPROPEDIT));
                Self::new(path, timeout)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn command(&self, file: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(self.path.clone());
        cmd.timeout(self.timeout).arg(file);
        cmd
    }
}

#[async_trait]
impl TagEditor for Mkvpropedit {
    fn name(&self) -> &'static str {
        MKVPROPEDIT
    }

    async fn set_title(&self, file: &Path, title: &str) -> Result<()> {
        let mut cmd = self.command(file);
        cmd.args(["--edit", "info", "--set"])
            .arg(format!("title={title}"));
        tracing::debug!("{MKVPROPEDIT} {} --edit info --set title={title}", file.display());
        cmd.execute().await?;
        Ok(())
    }

    async fn apply_global_tags(&self, file: &Path, tags_file: &Path) -> Result<()> {
        let mut spec = std::ffi::OsString::from("global:");
        spec.push(tags_file);

        let mut cmd = self.command(file);
        cmd.arg("--tags").arg(&spec);
        tracing::debug!(
            "{MKVPROPEDIT} {} --tags global:{}",
            file.display(),
            tags_file.display()
        );
        cmd.execute().await?;
        Ok(())
    }
}
