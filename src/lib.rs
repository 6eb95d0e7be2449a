//! mkvretag - batch retitle, tag and rename Matroska episodes
//!
//! This library crate exposes the batch machinery for integration testing.

pub mod batch;
pub mod scan;
