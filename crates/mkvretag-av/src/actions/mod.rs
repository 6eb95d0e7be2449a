//! Per-file editing steps: display title and global tags.
//!
//! Each step logs its own success or failure against the file's display name
//! and returns the error so the caller can record it. Nothing here aborts a
//! batch.

mod tags;
mod title;

pub use tags::embed_tags;
pub use title::set_title;
