//! manifest-gen CLI Binary
//!
//! Scans a folder and writes one absolute URL per file to a manifest.

use clap::Parser;
use manifest_gen::cli::{map_error, Cli, RunContext};
use manifest_gen::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(&logging_config) {
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }

    info!("manifest-gen starting");

    let context = match RunContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid arguments: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute() {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args.
/// Logging stays off unless --verbose is given; explicit flags override the verbose defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    if !cli.verbose {
        return LoggingConfig::off();
    }

    let mut config = LoggingConfig {
        level: "debug".to_string(),
        color: !cli.no_color,
        ..LoggingConfig::default()
    };

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    config
}
