//! # Compare Subcommand
//!
//! Decodes two record documents under one description and compares them
//! structurally. Prints `equal`, or the first difference, or every
//! difference with `--all`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use bmx_core::{first_difference, AllDifferences, DeepEq, Difference, FieldPath};
use bmx_schema::{decode_record, DynRecord, RecordSchema, SchemaError};

use crate::config::CliConfig;
use crate::{load_document, EXIT_DIFFERENT, EXIT_ERROR};

/// Arguments for `bmx compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Record description (YAML or JSON).
    #[arg(long, short)]
    pub schema: Option<PathBuf>,

    /// Report every difference, not just the first.
    #[arg(long)]
    pub all: bool,

    /// Stop after this many differences (implies --all).
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print differences as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// Left-hand record document.
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Right-hand record document.
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,
}

/// Execute the compare subcommand.
///
/// Returns exit code: 0 equal, 1 different, 2 when either document does not
/// decode.
pub fn run_compare(args: &CompareArgs, config: &CliConfig) -> Result<u8> {
    let schema_path = config.schema_or(args.schema.as_deref())?;
    let schema = RecordSchema::load(&schema_path)
        .with_context(|| format!("failed to load record description {}", schema_path.display()))?;

    let (Some(left), Some(right)) = (
        decode_or_report(&schema, &args.left)?,
        decode_or_report(&schema, &args.right)?,
    ) else {
        return Ok(EXIT_ERROR);
    };

    let limit = args.limit.or(config.limit);
    let report_all = args.all || config.all || limit.is_some();
    let found = if report_all {
        collect_differences(&left, &right, limit)
    } else {
        first_difference(&left, &right).into_iter().collect()
    };

    tracing::info!(
        record = %schema.name,
        left = %args.left.display(),
        right = %args.right.display(),
        differences = found.len(),
        "compared records"
    );

    if found.is_empty() {
        debug_assert!(left.deep_eq(&right));
        println!("equal");
        return Ok(0);
    }

    for difference in &found {
        if args.json {
            println!("{}", serde_json::to_string(difference)?);
        } else {
            println!("{}: {difference}", schema.name);
        }
    }
    Ok(EXIT_DIFFERENT)
}

/// Every difference between two records, up to `limit`.
pub fn collect_differences(left: &DynRecord, right: &DynRecord, limit: Option<usize>) -> Vec<Difference> {
    let mut sink = match limit {
        Some(limit) => AllDifferences::with_limit(limit),
        None => AllDifferences::default(),
    };
    let mut path = FieldPath::root();
    // The sink holds the outcome whether or not the limit stopped the walk.
    let _ = left.walk_differences(right, &mut path, &mut sink);
    sink.found
}

/// Decode one document. Decode violations are printed and yield `None`;
/// unreadable files and parse failures are errors.
fn decode_or_report(schema: &RecordSchema, path: &Path) -> Result<Option<DynRecord>> {
    let document = load_document(path)?;
    match decode_record(schema, &document) {
        Ok(record) => Ok(Some(record)),
        Err(SchemaError::DecodeFailed { violations, .. }) => {
            println!("{}: does not fit record {}", path.display(), schema.name);
            for violation in &violations {
                println!("  FAIL: {violation}");
            }
            Ok(None)
        }
        Err(other) => Err(other).with_context(|| format!("failed to decode {}", path.display())),
    }
}
