//! CLI parse: clap types for manifest-gen. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// manifest-gen - Write a sorted URL manifest for every file under a folder
#[derive(Parser, Debug)]
#[command(name = "manifest-gen")]
#[command(about = "Write a sorted URL manifest for every file under a folder")]
pub struct Cli {
    /// Folder to scan
    #[arg(default_value = ".")]
    pub target_folder: PathBuf,

    /// URL prefix every file is served under (trailing slashes are stripped)
    #[arg(default_value = "https://example.com")]
    pub base_url: String,

    /// Manifest file to write
    #[arg(default_value = "manifest.txt")]
    pub output_file: PathBuf,

    /// Skip files and directories whose name matches (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Only list files up to this many levels below the folder
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}
