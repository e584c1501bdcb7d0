//! viewer-html - HTML rendering for transcript state documents
//!
//! Rendering is a pure function from the validated model to a node tree;
//! a thin serializer turns the tree into HTML text. There is no retained
//! state: every call rebuilds the full tree from scratch.

pub mod parts;
pub mod transcript;
pub mod tree;

pub use parts::*;
pub use transcript::*;
pub use tree::*;
