//! # Error Types
//!
//! Loading a description and decoding a document are the only fallible
//! operations in the workspace. Comparison itself never fails.

use thiserror::Error;

use crate::decode::Violation;

/// Errors returned while loading descriptions or decoding documents.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The description could not be read or parsed.
    #[error("failed to load schema {path}: {reason}")]
    Load {
        /// Path or label of the description source.
        path: String,
        /// Parser or reader message.
        reason: String,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported schema format for {path}: expected .yaml, .yml or .json")]
    UnsupportedFormat {
        /// Offending path.
        path: String,
    },

    /// The description parsed but breaks a structural rule.
    #[error("invalid record schema {record}: {reason}")]
    Invalid {
        /// Record name as written in the description.
        record: String,
        /// The rule that was broken.
        reason: String,
    },

    /// A scalar kind name that is not one of the five leaf kinds.
    #[error("unknown scalar kind: {0:?}")]
    UnknownKind(String),

    /// A storage class name other than value, pointer or allocatable.
    #[error("unknown storage class: {0:?}")]
    UnknownStorage(String),

    /// The document does not fit the description.
    #[error("{count} violation(s) decoding {record}")]
    DecodeFailed {
        /// Record the document was decoded against.
        record: String,
        /// Number of violations.
        count: usize,
        /// Every violation, in document order.
        violations: Vec<Violation>,
    },

    /// I/O error while reading a description.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
