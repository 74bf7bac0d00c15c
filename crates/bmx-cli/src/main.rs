//! # bmx CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bmx_cli::check::{run_check, CheckArgs};
use bmx_cli::compare::{run_compare, CompareArgs};
use bmx_cli::config::CliConfig;
use bmx_cli::describe::{run_describe, DescribeArgs};
use bmx_cli::EXIT_ERROR;

/// Structural comparison of Bmad interop record documents.
#[derive(Parser, Debug)]
#[command(name = "bmx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two record documents field by field.
    Compare(CompareArgs),

    /// Check record documents against a description.
    Check(CheckArgs),

    /// List the fields of a record description.
    Describe(DescribeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "bmx starting");

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Compare(args) => run_compare(&args, &config),
        Commands::Check(args) => run_check(&args, &config),
        Commands::Describe(args) => run_describe(&args),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
