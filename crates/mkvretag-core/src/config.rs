//! External tool configuration.
//!
//! mkvretag has no configuration file; these values come from CLI flags and
//! their environment variable fallbacks. Every field defaults sensibly so
//! `ToolsConfig::default()` is a working configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Paths and limits for the external CLI tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Explicit location of `mkvpropedit`. When unset (or missing on disk)
    /// the tool is looked up on `PATH`.
    pub mkvpropedit_path: Option<PathBuf>,

    /// Maximum seconds a single tool invocation may run. `None` waits
    /// indefinitely.
    pub timeout_secs: Option<u64>,
}

impl ToolsConfig {
    /// The per-invocation timeout, if one is configured.
    ///
    /// A zero value is treated as "no timeout".
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
