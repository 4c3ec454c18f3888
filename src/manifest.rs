//! Manifest generation
//!
//! Turns the files found under a target folder into a sorted list of URLs and
//! writes it out, one URL per line.

use crate::error::ManifestError;
use crate::tree::path;
use crate::tree::walker::{Walker, WalkerConfig};
use std::cmp::Ordering;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// One file-to-URL mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path relative to the target folder, always `/`-separated
    pub relative_path: String,
    /// Base URL joined with the relative path
    pub url: String,
}

impl Entry {
    pub fn new(base_url: &str, relative_path: String) -> Self {
        let url = path::join_url(base_url, &relative_path);
        Self { relative_path, url }
    }
}

/// Case-insensitive comparison of two URLs.
///
/// Lowercased strings decide the order; the original strings break ties so the
/// result never depends on the order entries were discovered in.
pub fn compare_urls(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sorted sequence of manifest URLs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    urls: Vec<String>,
}

impl Manifest {
    /// Build a manifest from entries in any order
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut urls: Vec<String> = entries.into_iter().map(|e| e.url).collect();
        // Same order as compare_urls, with each lowercase key computed once
        urls.sort_by_cached_key(|url| (url.to_lowercase(), url.clone()));
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Render the manifest text: every URL followed by `\n`, nothing else
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.urls.iter().map(|u| u.len() + 1).sum());
        for url in &self.urls {
            out.push_str(url);
            out.push('\n');
        }
        out
    }

    /// Write the manifest to `output_file`, creating missing parent directories
    /// and replacing any existing content.
    pub fn write_to(&self, output_file: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(dir = %parent.display(), "Creating output directory");
                fs::create_dir_all(parent)
                    .map_err(|e| ManifestError::output_write(parent, e))?;
            }
        }

        let file = fs::File::create(output_file)
            .map_err(|e| ManifestError::output_write(output_file, e))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(self.render().as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ManifestError::output_write(output_file, e))?;

        Ok(())
    }
}

/// Inputs of a single generation run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub target_folder: PathBuf,
    pub base_url: String,
    pub output_file: PathBuf,
    pub walker: WalkerConfig,
}

impl GenerateRequest {
    pub fn new(
        target_folder: impl Into<PathBuf>,
        base_url: impl Into<String>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            target_folder: target_folder.into(),
            base_url: base_url.into(),
            output_file: output_file.into(),
            walker: WalkerConfig::default(),
        }
    }

    pub fn with_walker_config(mut self, walker: WalkerConfig) -> Self {
        self.walker = walker;
        self
    }
}

/// Outcome of a successful generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of URLs written
    pub entry_count: usize,
    /// Absolute path of the written manifest
    pub written_path: PathBuf,
    /// Base URL after trailing slashes were stripped
    pub base_url: String,
}

/// Walks a target folder and writes its URL manifest
pub struct ManifestGenerator {
    walker: Walker,
    base_url: String,
}

impl ManifestGenerator {
    pub fn new(target_folder: PathBuf, base_url: &str) -> Self {
        Self::with_walker_config(target_folder, base_url, WalkerConfig::default())
    }

    pub fn with_walker_config(target_folder: PathBuf, base_url: &str, config: WalkerConfig) -> Self {
        Self {
            walker: Walker::with_config(target_folder, config),
            base_url: path::normalize_base_url(base_url).to_string(),
        }
    }

    /// Collect every entry below the target folder, unsorted by URL
    pub fn collect_entries(&self) -> Result<Vec<Entry>, ManifestError> {
        let root = self.walker.root();
        let files = match self.walker.walk() {
            Ok(files) => {
                debug!(file_count = files.len(), "Walked target folder");
                files
            }
            Err(e) => {
                error!("Directory walk failed: {}", e);
                return Err(e);
            }
        };

        files
            .iter()
            .map(|file| {
                let relative = path::relative_url_path(root, file)?;
                Ok(Entry::new(&self.base_url, relative))
            })
            .collect()
    }

    /// Build the sorted manifest without writing it
    pub fn build(&self) -> Result<Manifest, ManifestError> {
        Ok(Manifest::from_entries(self.collect_entries()?))
    }

    /// Build the manifest and write it to `output_file`
    #[instrument(skip(self), fields(root = %self.walker.root().display()))]
    pub fn generate(&self, output_file: &Path) -> Result<GenerationReport, ManifestError> {
        let start = Instant::now();
        info!("Starting manifest generation");

        let manifest = self.build()?;
        manifest.write_to(output_file)?;

        let written_path = dunce::canonicalize(output_file)
            .map_err(|e| ManifestError::output_write(output_file, e))?;

        info!(
            entry_count = manifest.len(),
            output = %written_path.display(),
            duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Manifest written"
        );

        Ok(GenerationReport {
            entry_count: manifest.len(),
            written_path,
            base_url: self.base_url.clone(),
        })
    }
}

/// Generate the manifest described by `request`
pub fn generate(request: &GenerateRequest) -> Result<GenerationReport, ManifestError> {
    ManifestGenerator::with_walker_config(
        request.target_folder.clone(),
        &request.base_url,
        request.walker.clone(),
    )
    .generate(&request.output_file)
}
