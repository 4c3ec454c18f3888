//! Filesystem walker for collecting the files a manifest lists

use crate::error::ManifestError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to descend into symlinked directories (default: false)
    pub follow_symlinks: bool,
    /// Path components to skip; a matching directory is pruned with everything below it
    pub ignore_patterns: Vec<String>,
    /// Maximum depth below the root to list files from (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the filesystem and collect the path of every regular file below the root.
    ///
    /// A missing root yields no files. A root that cannot be reached, or any error below
    /// it, aborts the walk. Returned paths are sorted so repeated walks agree.
    pub fn walk(&self) -> Result<Vec<PathBuf>, ManifestError> {
        match std::fs::metadata(&self.root) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(root = %self.root.display(), "Target folder does not exist, listing no files");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ManifestError::DirectoryAccess {
                    path: self.root.clone(),
                    message: e.to_string(),
                });
            }
        }

        let mut files = Vec::new();

        // min_depth(1): the root itself is never an entry, even when it is a file
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in walker {
            let entry = entry?;
            let file_type = entry.file_type();

            if file_type.is_file() {
                files.push(entry.into_path());
            } else if file_type.is_symlink() {
                // Not following links: count a link only when it resolves to a regular file
                let resolved = std::fs::metadata(entry.path());
                match resolved {
                    Ok(metadata) if metadata.is_file() => files.push(entry.into_path()),
                    Ok(_) => debug!(path = %entry.path().display(), "Skipping symlink to directory"),
                    Err(e) => {
                        debug!(path = %entry.path().display(), error = %e, "Skipping dangling symlink")
                    }
                }
            }
        }

        files.sort();

        Ok(files)
    }

    /// Check if an entry should be ignored based on ignore patterns.
    /// Only components below the root are compared.
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }

        let relative = entry
            .path()
            .strip_prefix(&self.root)
            .unwrap_or_else(|_| entry.path());

        let ignored = relative.components().any(|component| match component {
            std::path::Component::Normal(name) => self
                .config
                .ignore_patterns
                .iter()
                .any(|pattern| name.to_string_lossy() == pattern.as_str()),
            _ => false,
        });

        if ignored {
            debug!(path = %entry.path().display(), "Ignoring entry");
        }

        ignored
    }
}
