//! # bmx-core: Structural Equality for Interop Records
//!
//! Records that mirror Fortran derived types on the host side are built from
//! a small vocabulary: scalars, nullable scalars, and ordered containers of
//! one to three levels of nesting. This crate defines that vocabulary and the
//! deep-equality protocol over it.
//!
//! ## Modules
//!
//! - **Scalars** (`scalar.rs`): the `Complex` leaf type. The other leaves are
//!   plain `bool`, integers, `f64`, and `String`.
//! - **Containers** (`container.rs`): `Array<T>`, `Matrix<T>`, `Tensor<T>`
//!   and the per-kind aliases (`RealMatrix`, `BoolTensor`, ...), plus fill
//!   constructors.
//! - **Equality** (`eq.rs`): the [`DeepEq`] trait, its impls for leaves,
//!   slices, `Vec`, `Option` and `Box`, and the named comparison entry points.
//! - **Diagnostics** (`diff.rs`): [`FieldPath`], [`Difference`], and the
//!   [`DiffSink`] that decides whether a walk stops at the first difference.
//! - **Records** (`record.rs`, `records.rs`): the [`RecordDiff`] builder, the
//!   [`deep_eq_record!`] macro, and the `My` / `Ttt` records.
//!
//! ## Semantics
//!
//! Leaf equality is native equality. There is no tolerance, and floating
//! point follows IEEE rules, so a value holding a NaN is not equal to itself.
//! Containers compare length first at every nesting level, which makes
//! ragged matrices and tensors compare row by row. Nullable values are equal
//! when both are absent or both are present and equal.
//!
//! Comparison never fails. Shape and presence mismatches are reported as
//! "not equal" and, through the diagnostics API, as a [`Difference`].
//!
//! ## Crate Policy
//!
//! - No internal dependencies; this is the leaf of the workspace.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod container;
pub mod diff;
pub mod eq;
pub mod record;
pub mod records;
pub mod scalar;

pub use container::{
    filled_array, filled_matrix, filled_tensor, Array, BoolArray, BoolMatrix, BoolTensor,
    ComplexArray, ComplexMatrix, ComplexTensor, IntArray, IntMatrix, IntTensor, Matrix,
    RealArray, RealMatrix, RealTensor, StringArray, Tensor,
};
pub use diff::{AllDifferences, DiffSink, Difference, DifferenceKind, FieldPath, FirstDifference, Segment};
pub use eq::{
    differences, equal_nullable, equal_record, equal_sequence, equal_sequence_of_sequences,
    equal_sequence_of_sequences_of_sequences, first_difference, DeepEq,
};
pub use record::RecordDiff;
pub use records::{My, Ttt};
pub use scalar::Complex;
