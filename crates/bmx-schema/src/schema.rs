//! # Record Descriptions
//!
//! A [`RecordSchema`] is the field layout of one interop record. It is
//! validated on every load path, so a value of this type always satisfies
//! the structural rules below.
//!
//! ## Rules
//!
//! 1. Record and field names are identifiers: an ASCII letter or `_`
//!    followed by ASCII letters, digits or `_`.
//! 2. Field names are unique within a record.
//! 3. Rank is at most [`MAX_RANK`]; text fields are at most rank 1.
//! 4. A record has at least one field.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::kind::{ScalarKind, Storage, MAX_RANK};

/// One declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,
    pub kind: ScalarKind,
    /// Container nesting: 0 scalar, 1 array, 2 matrix, 3 tensor.
    #[serde(default)]
    pub rank: u8,
    #[serde(default)]
    pub storage: Storage,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: ScalarKind, rank: u8, storage: Storage) -> Self {
        Self {
            name: name.into(),
            kind,
            rank,
            storage,
        }
    }

    /// True when the field may be absent.
    pub fn is_nullable(&self) -> bool {
        self.storage.is_nullable()
    }

    /// Human-readable type, e.g. `real matrix (pointer)`.
    pub fn type_label(&self) -> String {
        let shape = match self.rank {
            0 => "scalar",
            1 => "array",
            2 => "matrix",
            _ => "tensor",
        };
        match self.storage {
            Storage::Value => format!("{} {shape}", self.kind),
            storage => format!("{} {shape} ({storage})", self.kind),
        }
    }
}

/// The field layout of one record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    /// Build and validate a description in code.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let schema = Self {
            name: name.into(),
            fields,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Parse a YAML description.
    pub fn from_yaml_str(source: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_yaml::from_str(source).map_err(|e| SchemaError::Load {
            path: "<yaml>".to_string(),
            reason: e.to_string(),
        })?;
        schema.validate()?;
        Ok(schema)
    }

    /// Parse a JSON description.
    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(source).map_err(|e| SchemaError::Load {
            path: "<json>".to_string(),
            reason: e.to_string(),
        })?;
        schema.validate()?;
        Ok(schema)
    }

    /// Read a description from disk. The extension picks the format.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let source = std::fs::read_to_string(path)?;
        let relabel = |err: SchemaError| match err {
            SchemaError::Load { reason, .. } => SchemaError::Load {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        };

        let schema = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&source).map_err(relabel)?,
            Some("json") => Self::from_json_str(&source).map_err(relabel)?,
            _ => {
                return Err(SchemaError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        tracing::debug!(
            path = %path.display(),
            record = %schema.name,
            fields = schema.fields.len(),
            "loaded record schema"
        );
        Ok(schema)
    }

    /// Check the structural rules listed in the module docs.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let invalid = |reason: String| SchemaError::Invalid {
            record: self.name.clone(),
            reason,
        };

        if !is_identifier(&self.name) {
            return Err(invalid(format!(
                "record name {:?} is not an identifier",
                self.name
            )));
        }
        if self.fields.is_empty() {
            return Err(invalid("record declares no fields".to_string()));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !is_identifier(&field.name) {
                return Err(invalid(format!(
                    "field name {:?} is not an identifier",
                    field.name
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(invalid(format!("duplicate field {:?}", field.name)));
            }
            if field.rank > MAX_RANK {
                return Err(invalid(format!(
                    "field {:?} has rank {}, maximum is {MAX_RANK}",
                    field.name, field.rank
                )));
            }
            if field.rank > field.kind.max_rank() {
                return Err(invalid(format!(
                    "field {:?}: {} fields support rank {} at most",
                    field.name,
                    field.kind,
                    field.kind.max_rank()
                )));
            }
        }
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
