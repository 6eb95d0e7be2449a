//! External tool detection and management.
//!
//! The [`ToolRegistry`] discovers and caches the location of `mkvpropedit`
//! and provides lookup methods for the rest of the crate.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use mkvretag_core::config::ToolsConfig;
use mkvretag_core::{Error, Result};

use crate::command::ToolCommand;

/// Name of the MKVToolNix property editor.
pub const MKVPROPEDIT: &str = "mkvpropedit";

/// Known tool names that the registry manages.
const KNOWN_TOOLS: &[&str] = &[MKVPROPEDIT];

/// Configuration for a single external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Human-readable tool name (e.g. "mkvpropedit").
    pub name: String,
    /// Resolved path to the executable.
    pub path: PathBuf,
    /// Maximum execution time before the tool is killed.
    pub timeout: Option<Duration>,
}

impl ToolConfig {
    /// Start a [`ToolCommand`] for this tool with its timeout applied.
    pub fn command(&self) -> ToolCommand {
        let mut cmd = ToolCommand::new(self.path.clone());
        cmd.timeout(self.timeout);
        cmd
    }
}

/// Registry holding discovered tool configurations.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolConfig>,
}

impl ToolRegistry {
    /// Discover tools by searching `PATH` (or using overrides from config).
    ///
    /// If the [`ToolsConfig`] supplies a custom path **and** that path exists,
    /// it is used directly. Otherwise [`which::which`] is used to locate the
    /// tool in `PATH`. Tools that are not found are omitted from the registry.
    pub fn discover(tools_config: &ToolsConfig) -> Self {
        let mut tools = HashMap::new();

        for &name in KNOWN_TOOLS {
            let custom_path = match name {
                MKVPROPEDIT => tools_config.mkvpropedit_path.as_deref(),
                _ => None,
            };

            let resolved = match custom_path {
                Some(p) if p.exists() => Some(p.to_path_buf()),
                Some(p) => {
                    tracing::warn!(
                        "Configured {name} path {} does not exist; searching PATH",
                        p.display()
                    );
                    which::which(name).ok()
                }
                None => which::which(name).ok(),
            };

            match resolved {
                Some(path) => {
                    tracing::debug!("Found {name} at {}", path.display());
                    tools.insert(
                        name.to_string(),
                        ToolConfig {
                            name: name.to_string(),
                            path,
                            timeout: tools_config.timeout(),
                        },
                    );
                }
                None => tracing::debug!("{name} not found"),
            }
        }

        Self { tools }
    }

    /// Return a reference to the [`ToolConfig`] for the given tool, or an
    /// [`Error::Tool`] if the tool was not found during discovery.
    pub fn require(&self, name: &str) -> Result<&ToolConfig> {
        self.tools.get(name).ok_or_else(|| {
            Error::tool(name, format!("{name} not found; is it installed and in PATH?"))
        })
    }

    /// Whether the tool was found during discovery.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Run `<tool> --version` and return the first line of its output.
    pub async fn version(&self, name: &str) -> Option<String> {
        let cfg = self.tools.get(name)?;
        let output = cfg
            .command()
            .arg("--version")
            .fail_on_stderr(false)
            .execute()
            .await
            .ok()?;

        output.stdout.lines().next().map(|s| s.trim().to_string())
    }
}
