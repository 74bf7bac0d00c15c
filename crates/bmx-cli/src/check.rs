//! # Check Subcommand
//!
//! Decodes each document under a description and lists every violation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use bmx_schema::{decode_record, RecordSchema, SchemaError};

use crate::config::CliConfig;
use crate::{load_document, EXIT_DIFFERENT};

/// Arguments for `bmx check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Record description (YAML or JSON).
    #[arg(long, short)]
    pub schema: Option<PathBuf>,

    /// Record documents to check.
    #[arg(value_name = "DOC", required = true)]
    pub documents: Vec<PathBuf>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every document decodes, 1 otherwise.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let schema_path = config.schema_or(args.schema.as_deref())?;
    let schema = RecordSchema::load(&schema_path)
        .with_context(|| format!("failed to load record description {}", schema_path.display()))?;

    let mut failed = 0usize;
    for path in &args.documents {
        let document = load_document(path)?;
        match decode_record(&schema, &document) {
            Ok(_) => println!("PASS: {}", path.display()),
            Err(SchemaError::DecodeFailed { violations, .. }) => {
                failed += 1;
                println!("FAIL: {}", path.display());
                for violation in &violations {
                    println!("  {violation}");
                }
            }
            Err(other) => {
                return Err(other).with_context(|| format!("failed to decode {}", path.display()))
            }
        }
    }

    println!(
        "{}: {}/{} document(s) passed",
        schema.name,
        args.documents.len() - failed,
        args.documents.len()
    );

    if failed > 0 {
        Ok(EXIT_DIFFERENT)
    } else {
        Ok(0)
    }
}
