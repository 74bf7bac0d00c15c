//! # Dynamic Records
//!
//! Kind-tagged values for records that have a description but no Rust
//! type. Equality goes through [`DeepEq`], so a dynamic record compares by
//! exactly the rules the static records in `bmx-core` follow. Kinds and
//! ranks are checked when a document is decoded; if two values of different
//! kind or rank still meet here they are reported as a `Kind` difference
//! rather than treated as an error.

use std::ops::ControlFlow;

use bmx_core::{Complex, DeepEq, DiffSink, DifferenceKind, FieldPath};
use serde::Serialize;

use crate::kind::ScalarKind;

/// A leaf value tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Real(f64),
    Complex(Complex),
    Text(String),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::Int(_) => ScalarKind::Int,
            Self::Real(_) => ScalarKind::Real,
            Self::Complex(_) => ScalarKind::Complex,
            Self::Text(_) => ScalarKind::Text,
        }
    }
}

impl DeepEq for Scalar {
    fn deep_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.deep_eq(b),
            (Self::Int(a), Self::Int(b)) => a.deep_eq(b),
            (Self::Real(a), Self::Real(b)) => a.deep_eq(b),
            (Self::Complex(a), Self::Complex(b)) => a.deep_eq(b),
            (Self::Text(a), Self::Text(b)) => a.deep_eq(b),
            _ => false,
        }
    }

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.walk_differences(b, path, sink),
            (Self::Int(a), Self::Int(b)) => a.walk_differences(b, path, sink),
            (Self::Real(a), Self::Real(b)) => a.walk_differences(b, path, sink),
            (Self::Complex(a), Self::Complex(b)) => a.walk_differences(b, path, sink),
            (Self::Text(a), Self::Text(b)) => a.walk_differences(b, path, sink),
            (a, b) => sink.record(
                path,
                DifferenceKind::Kind {
                    left: a.kind().to_string(),
                    right: b.kind().to_string(),
                },
            ),
        }
    }
}

/// A field value at one of the four ranks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Scalar(Scalar),
    Array(Vec<Scalar>),
    Matrix(Vec<Vec<Scalar>>),
    Tensor(Vec<Vec<Vec<Scalar>>>),
}

impl FieldValue {
    pub fn rank(&self) -> u8 {
        match self {
            Self::Scalar(_) => 0,
            Self::Array(_) => 1,
            Self::Matrix(_) => 2,
            Self::Tensor(_) => 3,
        }
    }

    fn rank_label(&self) -> String {
        format!("rank {}", self.rank())
    }
}

impl DeepEq for FieldValue {
    fn deep_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a.deep_eq(b),
            (Self::Array(a), Self::Array(b)) => a.deep_eq(b),
            (Self::Matrix(a), Self::Matrix(b)) => a.deep_eq(b),
            (Self::Tensor(a), Self::Tensor(b)) => a.deep_eq(b),
            _ => false,
        }
    }

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()> {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a.walk_differences(b, path, sink),
            (Self::Array(a), Self::Array(b)) => a.walk_differences(b, path, sink),
            (Self::Matrix(a), Self::Matrix(b)) => a.walk_differences(b, path, sink),
            (Self::Tensor(a), Self::Tensor(b)) => a.walk_differences(b, path, sink),
            (a, b) => sink.record(
                path,
                DifferenceKind::Kind {
                    left: a.rank_label(),
                    right: b.rank_label(),
                },
            ),
        }
    }
}

/// One named field of a dynamic record. `None` means absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynField {
    pub name: String,
    pub value: Option<FieldValue>,
}

/// A decoded record: the description's name and its fields in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynRecord {
    record: String,
    fields: Vec<DynField>,
}

impl DynRecord {
    pub fn new(record: impl Into<String>, fields: Vec<DynField>) -> Self {
        Self {
            record: record.into(),
            fields,
        }
    }

    pub fn record_name(&self) -> &str {
        &self.record
    }

    pub fn fields(&self) -> &[DynField] {
        &self.fields
    }

    /// The value of a present field. `None` for absent or undeclared fields.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_ref())
    }

    /// Mutable access to a field slot, for building variants in tests and
    /// tools.
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut Option<FieldValue>> {
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .map(|f| &mut f.value)
    }
}

impl DeepEq for DynRecord {
    fn deep_eq(&self, other: &Self) -> bool {
        self.record == other.record
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|(a, b)| a.name == b.name && a.value.deep_eq(&b.value))
    }

    fn walk_differences(
        &self,
        other: &Self,
        path: &mut FieldPath,
        sink: &mut dyn DiffSink,
    ) -> ControlFlow<()> {
        if self.record != other.record {
            return sink.record(
                path,
                DifferenceKind::Kind {
                    left: self.record.clone(),
                    right: other.record.clone(),
                },
            );
        }
        if self.fields.len() != other.fields.len() {
            return sink.record(
                path,
                DifferenceKind::Length {
                    left: self.fields.len(),
                    right: other.fields.len(),
                },
            );
        }
        for (a, b) in self.fields.iter().zip(&other.fields) {
            path.push_field(a.name.clone());
            let flow = if a.name == b.name {
                a.value.walk_differences(&b.value, path, sink)
            } else {
                sink.record(
                    path,
                    DifferenceKind::Kind {
                        left: a.name.clone(),
                        right: b.name.clone(),
                    },
                )
            };
            path.pop();
            if flow.is_break() {
                return flow;
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmx_core::{differences, first_difference};

    fn reals(values: &[f64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::Real).collect()
    }

    fn record() -> DynRecord {
        DynRecord::new(
            "beam",
            vec![
                DynField {
                    name: "n".into(),
                    value: Some(FieldValue::Scalar(Scalar::Int(3))),
                },
                DynField {
                    name: "orbit".into(),
                    value: Some(FieldValue::Matrix(vec![reals(&[1.0, 2.0]), reals(&[3.0])])),
                },
                DynField {
                    name: "tag".into(),
                    value: None,
                },
            ],
        )
    }

    #[test]
    fn test_equal_records() {
        assert!(record().deep_eq(&record()));
        assert!(first_difference(&record(), &record()).is_none());
    }

    #[test]
    fn test_kind_mismatch_is_unequal_not_fault() {
        let a = Scalar::Int(1);
        let b = Scalar::Real(1.0);
        assert!(!a.deep_eq(&b));
        let d = first_difference(&a, &b).unwrap();
        assert_eq!(d.to_string(), "<root>: kind int != real");
    }

    #[test]
    fn test_rank_mismatch_is_unequal_not_fault() {
        let a = record();
        let mut b = record();
        *b.slot_mut("orbit").unwrap() = Some(FieldValue::Array(reals(&[1.0, 2.0, 3.0])));
        assert!(!a.deep_eq(&b));
        assert_eq!(
            first_difference(&a, &b).unwrap().to_string(),
            "orbit: kind rank 2 != rank 1"
        );
    }

    #[test]
    fn test_nested_value_difference_path() {
        let a = record();
        let mut b = record();
        *b.slot_mut("orbit").unwrap() =
            Some(FieldValue::Matrix(vec![reals(&[1.0, 2.0]), reals(&[3.5])]));
        assert_eq!(
            first_difference(&a, &b).unwrap().to_string(),
            "orbit[1][0]: 3.0 != 3.5"
        );
    }

    #[test]
    fn test_one_sided_absent_field() {
        let a = record();
        let mut b = record();
        *b.slot_mut("tag").unwrap() = Some(FieldValue::Scalar(Scalar::Text("x".into())));
        assert!(!a.deep_eq(&b));
        assert!(!b.deep_eq(&a));
    }

    #[test]
    fn test_different_record_names() {
        let a = record();
        let b = DynRecord::new("other", a.fields().to_vec());
        assert!(!a.deep_eq(&b));
        assert_eq!(differences(&a, &b).len(), 1);
    }

    #[test]
    fn test_accessors() {
        let r = record();
        assert_eq!(r.record_name(), "beam");
        assert_eq!(r.get("n"), Some(&FieldValue::Scalar(Scalar::Int(3))));
        assert!(r.get("tag").is_none());
        assert!(r.get("nope").is_none());
        assert_eq!(r.get("orbit").map(FieldValue::rank), Some(2));
    }
}
