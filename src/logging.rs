//! Logging System
//!
//! Structured logging using the `tracing` crate. Log lines go to stderr by default so the
//! confirmation printed on stdout stays clean. Logging never changes the manifest itself.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full filter directive (e.g. `manifest_gen=trace`)
pub const LOG_ENV_VAR: &str = "MANIFEST_GEN_LOG";

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            color: default_true(),
        }
    }
}

impl LoggingConfig {
    /// Logging disabled entirely
    pub fn off() -> Self {
        Self {
            level: "off".to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ManifestError> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(ManifestError::Config(format!(
                "Invalid log level: {} (must be one of {})",
                self.level,
                LEVELS.join(", ")
            )));
        }
        parse_format(&self.format)?;
        parse_output(&self.output)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
}

fn parse_format(format: &str) -> Result<LogFormat, ManifestError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ManifestError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        ))),
    }
}

fn parse_output(output: &str) -> Result<LogOutput, ManifestError> {
    match output {
        "stdout" => Ok(LogOutput::Stdout),
        "stderr" => Ok(LogOutput::Stderr),
        _ => Err(ManifestError::Config(format!(
            "Invalid log output: {} (must be 'stdout' or 'stderr')",
            output
        ))),
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `MANIFEST_GEN_LOG` environment variable (filter only)
/// 2. The given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<(), ManifestError> {
    config.validate()?;

    let filter = build_env_filter(config);
    let format = parse_format(&config.format)?;
    let output = parse_output(&config.output)?;

    let base_subscriber = Registry::default().with(filter);

    // Each arm has a distinct layer type, so they are initialized separately
    let result = match (format, output) {
        (LogFormat::Json, LogOutput::Stdout) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        (LogFormat::Json, LogOutput::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (LogFormat::Text, LogOutput::Stdout) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        (LogFormat::Text, LogOutput::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ManifestError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Build environment filter from the environment variable or config
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return filter;
    }

    EnvFilter::new(config.level.as_str())
}
