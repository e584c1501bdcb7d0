//! viewer-core - Core types and decoding for the transcript viewer
//!
//! This crate provides the data model for agent task-run transcripts (the
//! state document an agent exposes at `/state`), a validating decoder that
//! turns raw JSON into a closed union of part types, and the markup
//! converter used for text parts.

pub mod decode;
pub mod markdown;
pub mod types;

pub use decode::*;
pub use markdown::*;
pub use types::*;
