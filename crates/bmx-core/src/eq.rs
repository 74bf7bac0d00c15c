//! # Deep Equality
//!
//! [`DeepEq`] is implemented once for slices and lifted to `Vec`, fixed
//! arrays, `Option` and `Box`. Because `Matrix<T>` is `Vec<Vec<T>>`, the
//! same impl recurses through every nesting depth: lengths are checked at
//! each level before any element is looked at, so ragged rows are compared
//! row by row and never by total element count.
//!
//! The named entry points (`equal_sequence`, `equal_nullable`, ...) are thin
//! wrappers kept for callers that think in terms of container rank.

use std::ops::ControlFlow;

use crate::diff::{AllDifferences, DiffSink, Difference, DifferenceKind, FieldPath, FirstDifference};
use crate::scalar::Complex;

/// Recursive structural equality with optional mismatch reporting.
///
/// `deep_eq` is the fast predicate. `walk_differences` visits mismatches in
/// declaration and index order, handing each to `sink` with `path` pointing
/// at it. The two must agree: `deep_eq` is true exactly when the walk
/// reports nothing.
pub trait DeepEq {
    fn deep_eq(&self, other: &Self) -> bool;

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()>;
}

macro_rules! impl_leaf_deep_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepEq for $ty {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn deep_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[allow(clippy::float_cmp)]
                fn walk_differences(
                    &self,
                    other: &Self,
                    path: &mut FieldPath,
                    sink: &mut dyn DiffSink,
                ) -> ControlFlow<()> {
                    if self == other {
                        ControlFlow::Continue(())
                    } else {
                        sink.record(path, DifferenceKind::value(self, other))
                    }
                }
            }
        )*
    };
}

impl_leaf_deep_eq!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, Complex, String,
    str,
);

impl<T: DeepEq> DeepEq for [T] {
    fn deep_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.deep_eq(b))
    }

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()> {
        if self.len() != other.len() {
            return sink.record(
                path,
                DifferenceKind::Length {
                    left: self.len(),
                    right: other.len(),
                },
            );
        }
        for (index, (a, b)) in self.iter().zip(other).enumerate() {
            path.push_index(index);
            let flow = a.walk_differences(b, path, sink);
            path.pop();
            if flow.is_break() {
                return flow;
            }
        }
        ControlFlow::Continue(())
    }
}

impl<T: DeepEq> DeepEq for Vec<T> {
    #[inline]
    fn deep_eq(&self, other: &Self) -> bool {
        self.as_slice().deep_eq(other.as_slice())
    }

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()> {
        self.as_slice().walk_differences(other.as_slice(), path, sink)
    }
}

impl<T: DeepEq, const N: usize> DeepEq for [T; N] {
    #[inline]
    fn deep_eq(&self, other: &Self) -> bool {
        self.as_slice().deep_eq(other.as_slice())
    }

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()> {
        self.as_slice().walk_differences(other.as_slice(), path, sink)
    }
}

impl<T: DeepEq + ?Sized> DeepEq for Box<T> {
    #[inline]
    fn deep_eq(&self, other: &Self) -> bool {
        (**self).deep_eq(&**other)
    }

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()> {
        (**self).walk_differences(&**other, path, sink)
    }
}

impl<T: DeepEq> DeepEq for Option<T> {
    fn deep_eq(&self, other: &Self) -> bool {
        equal_nullable(self.as_ref(), other.as_ref())
    }

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()> {
        match (self, other) {
            (None, None) => ControlFlow::Continue(()),
            (Some(a), Some(b)) => a.walk_differences(b, path, sink),
            (a, b) => sink.record(
                path,
                DifferenceKind::Presence {
                    left: a.is_some(),
                    right: b.is_some(),
                },
            ),
        }
    }
}

/// 1-D comparison: same length and pairwise-equal elements.
pub fn equal_sequence<T: DeepEq>(seq1: &[T], seq2: &[T]) -> bool {
    seq1.deep_eq(seq2)
}

/// 2-D comparison. Inner lengths are checked per row.
pub fn equal_sequence_of_sequences<T: DeepEq>(m1: &[Vec<T>], m2: &[Vec<T>]) -> bool {
    m1.deep_eq(m2)
}

/// 3-D comparison. Lengths are checked at every level.
pub fn equal_sequence_of_sequences_of_sequences<T: DeepEq>(
    t1: &[Vec<Vec<T>>],
    t2: &[Vec<Vec<T>>],
) -> bool {
    t1.deep_eq(t2)
}

/// Nullable comparison: both absent, or both present and equal.
///
/// One side present and the other absent is always unequal, wherever the
/// comparison sits inside a larger record.
pub fn equal_nullable<T: DeepEq + ?Sized>(p1: Option<&T>, p2: Option<&T>) -> bool {
    match (p1, p2) {
        (None, None) => true,
        (Some(a), Some(b)) => a.deep_eq(b),
        _ => false,
    }
}

/// Record comparison: the conjunction of every field comparison.
pub fn equal_record<R: DeepEq + ?Sized>(r1: &R, r2: &R) -> bool {
    r1.deep_eq(r2)
}

/// The first mismatch in declaration and index order, or `None` if equal.
pub fn first_difference<T: DeepEq + ?Sized>(a: &T, b: &T) -> Option<Difference> {
    let mut sink = FirstDifference::default();
    let mut path = FieldPath::root();
    // The sink already holds the outcome; the flow only says whether it stopped early.
    let _ = a.walk_differences(b, &mut path, &mut sink);
    sink.0
}

/// Every mismatch. A length mismatch is reported once and the walk does not
/// descend below it.
pub fn differences<T: DeepEq + ?Sized>(a: &T, b: &T) -> Vec<Difference> {
    let mut sink = AllDifferences::default();
    let mut path = FieldPath::root();
    let _ = a.walk_differences(b, &mut path, &mut sink);
    sink.found
}
