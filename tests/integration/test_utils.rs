//! Shared test utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create every file in `files` (forward-slash relative paths) below `root`
pub fn create_files(root: &Path, files: &[&str]) {
    for rel in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, rel.as_bytes()).unwrap();
    }
}

/// A temp dir holding a `root/` tree with the given files and an output path outside it
pub fn fixture(files: &[&str]) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir_all(&root).unwrap();
    create_files(&root, files);
    let output = temp_dir.path().join("out").join("manifest.txt");
    (temp_dir, root, output)
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}
