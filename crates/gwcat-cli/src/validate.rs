//! # Validate Subcommand
//!
//! Reads a catalog JSON file, runs the schema validator, and prints every
//! finding with severity, document path, and message. Exits 0 when the
//! catalog has no error-level findings.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the catalog JSON file to check.
    pub file: PathBuf,
}

/// Run the validate subcommand.
pub fn run(args: &ValidateArgs) -> anyhow::Result<ExitCode> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;

    let catalog = match gwcat_schema::parse_str(&raw) {
        Ok(catalog) => catalog,
        Err(e) => {
            // Structural failure: surfaced as the sole output, validation
            // never runs.
            println!("error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = gwcat_schema::validate(&catalog);
    for finding in report.findings() {
        println!("{finding}");
    }

    if report.is_valid() {
        tracing::info!(
            events = catalog.events.len(),
            warnings = report.warning_count(),
            "catalog is valid"
        );
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            "catalog is invalid"
        );
        Ok(ExitCode::FAILURE)
    }
}
