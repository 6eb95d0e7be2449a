//! # mkvretag-av
//!
//! External tool layer for mkvretag.
//!
//! This crate provides:
//!
//! - **Tool discovery** ([`ToolRegistry`]) -- find `mkvpropedit`, honouring a
//!   configured path override.
//! - **Command execution** ([`ToolCommand`]) -- async builder that captures
//!   stdout/stderr and treats any stderr output as a failure.
//! - **Tag documents** ([`TagDocument`]) -- the Matroska tag XML applied as
//!   global tags.
//! - **Sidecar files** ([`SidecarFile`]) -- temporary tag files that are
//!   always removed, even when a step fails.
//! - **Editing** ([`TagEditor`], [`Mkvpropedit`]) and the per-file
//!   [`actions`] built on them.

pub mod actions;
pub mod command;
pub mod editor;
pub mod sidecar;
pub mod tags;
pub mod tools;

// ---- Re-exports for convenience ----

pub use command::{ToolCommand, ToolOutput};
pub use editor::{Mkvpropedit, TagEditor};
pub use sidecar::SidecarFile;
pub use tags::TagDocument;
pub use tools::{ToolConfig, ToolRegistry, MKVPROPEDIT};

pub use actions::{embed_tags, set_title};
