//! manifest-gen: URL manifests for static asset folders
//!
//! Walks a directory tree and writes a sorted plain-text manifest with one URL per
//! file, each formed by joining a base URL with the file's relative path.

pub mod cli;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod tree;

pub use error::ManifestError;
pub use manifest::{generate, GenerateRequest, GenerationReport, Manifest, ManifestGenerator};
