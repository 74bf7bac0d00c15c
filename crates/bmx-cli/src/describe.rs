//! # Describe Subcommand

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use bmx_schema::RecordSchema;

/// Arguments for `bmx describe`.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Record description (YAML or JSON).
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,
}

/// Print the description's fields in declaration order.
pub fn run_describe(args: &DescribeArgs) -> Result<u8> {
    let schema = RecordSchema::load(&args.schema)
        .with_context(|| format!("failed to load record description {}", args.schema.display()))?;
    print!("{}", render(&schema));
    Ok(0)
}

/// The listing printed by `describe`.
pub fn render(schema: &RecordSchema) -> String {
    let width = schema
        .fields
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(0);
    let mut out = format!("record {} ({} fields)\n", schema.name, schema.fields.len());
    for (index, field) in schema.fields.iter().enumerate() {
        out.push_str(&format!(
            "  {index:>2}  {:<width$}  {}\n",
            field.name,
            field.type_label()
        ));
    }
    out
}
