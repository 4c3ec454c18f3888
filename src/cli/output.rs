//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ManifestError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ManifestError) -> String {
    match e {
        ManifestError::DirectoryAccess { .. } | ManifestError::OutputWrite { .. } => {
            format!("Error: {}", e)
        }
        ManifestError::Config(msg) => format!("Invalid arguments: {}", msg),
    }
}
