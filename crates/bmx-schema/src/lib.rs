//! # bmx-schema: Record Descriptions
//!
//! The interop records are described, not hand-written: each one is a named
//! list of fields with a scalar kind, a rank (0 to 3) and a storage class.
//! This crate makes that description a runtime value so that records can be
//! decoded from JSON documents and compared without a Rust type per record.
//!
//! ## Description (`schema`)
//!
//! [`RecordSchema`] loads from YAML or JSON and validates itself on load:
//! identifier-shaped, unique field names, rank at most 3, text at most rank 1.
//!
//! ```yaml
//! name: ttt
//! fields:
//!   - { name: i0,  kind: bool }
//!   - { name: ip0, kind: bool, storage: pointer }
//!   - { name: i2,  kind: bool, rank: 2 }
//! ```
//!
//! ## Dynamic records (`value`, `decode`)
//!
//! [`decode_record`] turns a JSON object into a [`DynRecord`], collecting
//! every violation (wrong kind, wrong rank, missing required field, unknown
//! field) with its JSON Pointer. A [`DynRecord`] implements
//! [`bmx_core::DeepEq`], so the same equality and diagnostics apply as for
//! the static records in `bmx-core`.
//!
//! ## Crate Policy
//!
//! - Depends only on `bmx-core` internally.
//! - Decoding is a trust boundary: a document either decodes completely or
//!   is rejected with every violation listed.

pub mod decode;
pub mod error;
pub mod kind;
pub mod schema;
pub mod value;

pub use decode::{decode_record, Violation};
pub use error::SchemaError;
pub use kind::{ScalarKind, Storage, MAX_RANK};
pub use schema::{FieldSpec, RecordSchema};
pub use value::{DynField, DynRecord, FieldValue, Scalar};
