//! Unified error type for mkvretag.
//!
//! Library crates return [`Error`]; the binary wraps fatal failures in
//! `anyhow` and records everything else per file in the batch report.

use std::path::PathBuf;

/// Unified error type covering all failure modes in mkvretag.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Job input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The target directory could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that was being listed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An external tool (mkvpropedit) returned an error.
    #[error("Tool error [{tool}]: {message}")]
    Tool {
        /// Name of the tool that failed.
        tool: String,
        /// Human-readable error description.
        message: String,
    },

    /// The temporary tag file could not be written or removed.
    #[error("Sidecar error [{}]: {message}", path.display())]
    Sidecar {
        /// Location of the sidecar file.
        path: PathBuf,
        /// Human-readable error description.
        message: String,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Convenience constructor for [`Error::Tool`].
    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Tool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Sidecar`].
    pub fn sidecar(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Sidecar {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::ReadDir`].
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ReadDir {
            path: path.into(),
            source,
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
