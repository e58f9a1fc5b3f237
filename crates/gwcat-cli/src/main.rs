//! # gwcat CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Community catalog toolchain.
///
/// Checks catalog JSON submissions against the community catalog schema
/// and reports every problem with its location in the document.
#[derive(Parser, Debug)]
#[command(name = "gwcat", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a catalog JSON file.
    Validate(gwcat_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => gwcat_cli::validate::run(&args),
    }
}
