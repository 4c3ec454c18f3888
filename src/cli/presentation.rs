//! CLI presentation: text and json formatters for the generation report.

use crate::error::ManifestError;
use crate::manifest::GenerationReport;
use owo_colors::OwoColorize;
use std::str::FromStr;

/// Report formats accepted by `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(ManifestError::Config(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

pub fn format_report_text(report: &GenerationReport, color: bool) -> String {
    let label = "Manifest written to:";
    let label = if color {
        label.bold().green().to_string()
    } else {
        label.to_string()
    };
    format!(
        "{} {}\n   {} entries",
        label,
        report.written_path.display(),
        report.entry_count
    )
}

pub fn format_report_json(report: &GenerationReport) -> Result<String, ManifestError> {
    let out = serde_json::json!({
        "entries": report.entry_count,
        "output": report.written_path.to_string_lossy(),
        "base_url": report.base_url,
    });
    serde_json::to_string_pretty(&out)
        .map_err(|e| ManifestError::Config(format!("Failed to serialize report: {}", e)))
}

pub fn format_report(
    report: &GenerationReport,
    format: ReportFormat,
    color: bool,
) -> Result<String, ManifestError> {
    match format {
        ReportFormat::Text => Ok(format_report_text(report, color)),
        ReportFormat::Json => format_report_json(report),
    }
}
