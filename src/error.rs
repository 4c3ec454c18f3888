//! Error types for manifest generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The target folder could not be traversed (unreadable directory,
    /// permission denied partway through, symlink loop).
    #[error("Failed to read directory {path:?}: {message}")]
    DirectoryAccess { path: PathBuf, message: String },

    /// The output directory could not be created or the manifest could not be written.
    #[error("Failed to write manifest {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ManifestError {
    pub(crate) fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for ManifestError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        ManifestError::DirectoryAccess {
            path,
            message: err.to_string(),
        }
    }
}
