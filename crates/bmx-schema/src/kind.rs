//! # Scalar Kinds and Storage Classes
//!
//! Every field has exactly one leaf kind and one storage class. Storage
//! decides nullability: `value` fields are always present, `pointer` and
//! `allocatable` fields may be absent at any rank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Deepest container nesting a field may declare.
pub const MAX_RANK: u8 = 3;

/// The five leaf kinds. Descriptions are parsed through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ScalarKind {
    Bool,
    Int,
    Real,
    Complex,
    Text,
}

impl ScalarKind {
    /// All kinds in canonical order.
    pub fn all() -> &'static [ScalarKind] {
        &[Self::Bool, Self::Int, Self::Real, Self::Complex, Self::Text]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Real => "real",
            Self::Complex => "complex",
            Self::Text => "text",
        }
    }

    /// Highest rank a field of this kind may declare. There is no text
    /// matrix or tensor.
    pub fn max_rank(&self) -> u8 {
        match self {
            Self::Text => 1,
            Self::Bool | Self::Int | Self::Real | Self::Complex => MAX_RANK,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(Self::Bool),
            "int" => Ok(Self::Int),
            "real" => Ok(Self::Real),
            "complex" => Ok(Self::Complex),
            "text" => Ok(Self::Text),
            other => Err(SchemaError::UnknownKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for ScalarKind {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// How a field is held on the Fortran side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Storage {
    /// Plain component. Always present.
    #[default]
    Value,
    /// Pointer component. Absent when unassociated.
    Pointer,
    /// Allocatable component. Absent when unallocated.
    Allocatable,
}

impl Storage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Pointer => "pointer",
            Self::Allocatable => "allocatable",
        }
    }

    pub fn is_nullable(&self) -> bool {
        !matches!(self, Self::Value)
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Storage {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(Self::Value),
            "pointer" => Ok(Self::Pointer),
            "allocatable" => Ok(Self::Allocatable),
            other => Err(SchemaError::UnknownStorage(other.to_string())),
        }
    }
}

impl TryFrom<String> for Storage {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
