//! Filesystem traversal
//!
//! Walks the target folder and turns the files it finds into forward-slash
//! paths relative to the root.

pub mod path;
pub mod walker;
