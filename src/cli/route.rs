//! CLI route: turns parsed arguments into a generation request and dispatches it.

use crate::cli::parse::Cli;
use crate::cli::presentation::{format_report, ReportFormat};
use crate::error::ManifestError;
use crate::manifest::{self, GenerateRequest};
use crate::tree::walker::WalkerConfig;
use std::io::IsTerminal;
use tracing::debug;

/// Runtime context for CLI execution: the validated request and how to present its result.
#[derive(Debug)]
pub struct RunContext {
    request: GenerateRequest,
    format: ReportFormat,
    color: bool,
}

impl RunContext {
    /// Build the run context from parsed arguments. Fails before touching the filesystem
    /// when an option value is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self, ManifestError> {
        let format: ReportFormat = cli.format.parse()?;

        if cli.max_depth == Some(0) {
            return Err(ManifestError::Config(
                "--max-depth must be at least 1".to_string(),
            ));
        }

        let walker = WalkerConfig {
            follow_symlinks: cli.follow_symlinks,
            ignore_patterns: cli.exclude.clone(),
            max_depth: cli.max_depth,
        };

        let request = GenerateRequest::new(
            cli.target_folder.clone(),
            cli.base_url.clone(),
            cli.output_file.clone(),
        )
        .with_walker_config(walker);

        Ok(Self {
            request,
            format,
            color: !cli.no_color && std::io::stdout().is_terminal(),
        })
    }

    pub fn request(&self) -> &GenerateRequest {
        &self.request
    }

    /// Generate the manifest and return the text to print on stdout
    pub fn execute(&self) -> Result<String, ManifestError> {
        debug!(request = ?self.request, "Executing generate");
        let report = manifest::generate(&self.request)?;
        format_report(&report, self.format, self.color)
    }
}
