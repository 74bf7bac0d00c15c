//! # bmx-cli: Interop Record Command-Line Interface
//!
//! ## Subcommands
//!
//! - `compare`: structural comparison of two record documents
//! - `check`: decode documents against a description and list violations
//! - `describe`: list a description's fields in declaration order
//!
//! ## Exit codes
//!
//! `0` success (equal / all documents pass), `1` documents differ or fail a
//! check, `2` operational error (unreadable file, invalid description,
//! document that does not decode).
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in the subcommand modules; handlers delegate to
//!   `bmx-core` and `bmx-schema` for every decision.

pub mod check;
pub mod compare;
pub mod config;
pub mod describe;

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Exit code for a completed command with a negative outcome.
pub const EXIT_DIFFERENT: u8 = 1;
/// Exit code for a command that could not complete.
pub const EXIT_ERROR: u8 = 2;

/// Read and parse a JSON record document.
pub fn load_document(path: &Path) -> Result<Value> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read document {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("failed to parse document {} as JSON", path.display()))
}
