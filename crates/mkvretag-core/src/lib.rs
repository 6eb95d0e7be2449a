//! mkvretag-core: shared error type, tool configuration, job input and the
//! episode naming scheme.
//!
//! Everything here is free of I/O so the naming rules can be tested without
//! touching the filesystem or spawning `mkvpropedit`.

pub mod config;
pub mod episode;
pub mod error;
pub mod job;
pub mod media;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use episode::{EpisodeNumbering, EpisodeTitle};
pub use job::JobInput;
pub use media::Container;
