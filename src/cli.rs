//! CLI domain: parse, route, output, and presentation only.
//! Generation itself lives in the manifest module.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_report, format_report_json, format_report_text, ReportFormat};
pub use route::RunContext;
