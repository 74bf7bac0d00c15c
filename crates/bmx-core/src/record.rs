//! # Record Comparison
//!
//! A record compares field by field in declaration order. [`RecordDiff`]
//! drives the diagnostic walk: each field is visited under its own name and
//! the walk stops as soon as the sink asks it to. [`deep_eq_record!`]
//! generates the whole `DeepEq` impl from a field list.

use std::ops::ControlFlow;

use crate::diff::{DiffSink, FieldPath};
use crate::eq::DeepEq;

/// Field-by-field difference walk over two values of record type `R`.
pub struct RecordDiff<'a, 'p, R: ?Sized> {
    left: &'a R,
    right: &'a R,
    path: &'p mut FieldPath,
    sink: &'p mut dyn DiffSink,
    flow: ControlFlow<()>,
}

impl<'a, 'p, R: ?Sized> RecordDiff<'a, 'p, R> {
    pub fn new(
        left: &'a R,
        right: &'a R,
        path: &'p mut FieldPath,
        sink: &'p mut dyn DiffSink,
    ) -> Self {
        Self {
            left,
            right,
            path,
            sink,
            flow: ControlFlow::Continue(()),
        }
    }

    /// Compare one field. Skipped once an earlier field broke the walk.
    pub fn field<F>(mut self, name: &'static str, get: impl Fn(&R) -> &F) -> Self
    where
        F: DeepEq + ?Sized,
    {
        if self.flow.is_continue() {
            self.path.push_field(name);
            self.flow = get(self.left).walk_differences(get(self.right), self.path, &mut *self.sink);
            self.path.pop();
        }
        self
    }

    pub fn finish(self) -> ControlFlow<()> {
        self.flow
    }
}

/// Implement [`DeepEq`](crate::DeepEq) for a struct from its field list.
///
/// Fields are compared in the order listed, which should be declaration
/// order so that diagnostics name the first differing field.
///
/// ```
/// use bmx_core::{deep_eq_record, first_difference, DeepEq};
///
/// struct Beam {
///     species: String,
///     charge: Option<f64>,
///     orbit: Vec<f64>,
/// }
///
/// deep_eq_record!(Beam { species, charge, orbit });
///
/// let a = Beam { species: "electron".into(), charge: Some(-1.0), orbit: vec![0.0; 6] };
/// let mut b = Beam { species: "electron".into(), charge: Some(-1.0), orbit: vec![0.0; 6] };
/// assert!(a.deep_eq(&b));
///
/// b.orbit[4] = 1e-3;
/// assert_eq!(first_difference(&a, &b).unwrap().path.to_string(), "orbit[4]");
/// ```
#[macro_export]
macro_rules! deep_eq_record {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::DeepEq for $ty {
            fn deep_eq(&self, other: &Self) -> bool {
                true $(&& $crate::DeepEq::deep_eq(&self.$field, &other.$field))+
            }

            fn walk_differences(
                &self,
                other: &Self,
                path: &mut $crate::FieldPath,
                sink: &mut dyn $crate::DiffSink,
            ) -> ::core::ops::ControlFlow<()> {
                $crate::RecordDiff::new(self, other, path, sink)
                    $(.field(stringify!($field), |r| &r.$field))+
                    .finish()
            }
        }
    };
}
