//! # Document Decoding
//!
//! Turns a JSON object into a [`DynRecord`] under a [`RecordSchema`].
//!
//! ## Encoding
//!
//! | Kind      | JSON                                         |
//! |-----------|----------------------------------------------|
//! | `bool`    | `true` / `false`                             |
//! | `int`     | integer that fits in `i64`                   |
//! | `real`    | any number                                   |
//! | `complex` | `[re, im]` or `{"re": .., "im": ..}`         |
//! | `text`    | string                                       |
//!
//! Arrays nest one JSON array per rank. Inner arrays may differ in length.
//! A nullable field is absent when its key is missing or `null`; a `value`
//! field must be present and non-null.
//!
//! Decoding does not stop at the first problem. Every violation is
//! collected with a JSON Pointer to the offending value.

use std::fmt;

use bmx_core::Complex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::kind::ScalarKind;
use crate::schema::{FieldSpec, RecordSchema};
use crate::value::{DynField, DynRecord, FieldValue, Scalar};

/// One reason a document does not fit its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer to the offending value, `""` for the document itself.
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { self.path.as_str() };
        write!(f, "{path}: {}", self.message)
    }
}

/// Decode `document` as an instance of `schema`.
///
/// Returns [`SchemaError::DecodeFailed`] carrying every violation when the
/// document does not fit.
pub fn decode_record(schema: &RecordSchema, document: &Value) -> Result<DynRecord, SchemaError> {
    let mut violations = Vec::new();

    let record = match document.as_object() {
        Some(object) => decode_object(schema, object, &mut violations),
        None => {
            violations.push(Violation::new(
                "",
                format!("expected an object, found {}", json_type(document)),
            ));
            None
        }
    };

    tracing::debug!(
        record = %schema.name,
        violations = violations.len(),
        "decoded record document"
    );

    match record {
        Some(record) if violations.is_empty() => Ok(record),
        _ => Err(SchemaError::DecodeFailed {
            record: schema.name.clone(),
            count: violations.len(),
            violations,
        }),
    }
}

fn decode_object(
    schema: &RecordSchema,
    object: &Map<String, Value>,
    violations: &mut Vec<Violation>,
) -> Option<DynRecord> {
    let mut fields = Vec::with_capacity(schema.fields.len());
    let mut complete = true;

    for spec in &schema.fields {
        let path = format!("/{}", escape_pointer_token(&spec.name));
        match object.get(&spec.name) {
            None | Some(Value::Null) if spec.is_nullable() => fields.push(DynField {
                name: spec.name.clone(),
                value: None,
            }),
            None => {
                violations.push(Violation::new(&path, "required field is missing"));
                complete = false;
            }
            Some(Value::Null) => {
                violations.push(Violation::new(
                    &path,
                    format!("field has {} storage and cannot be null", spec.storage),
                ));
                complete = false;
            }
            Some(value) => match decode_field(spec, value, &path, violations) {
                Some(value) => fields.push(DynField {
                    name: spec.name.clone(),
                    value: Some(value),
                }),
                None => complete = false,
            },
        }
    }

    for key in object.keys() {
        if schema.field(key).is_none() {
            violations.push(Violation::new(
                &format!("/{}", escape_pointer_token(key)),
                format!("unknown field for record {}", schema.name),
            ));
        }
    }

    complete.then(|| DynRecord::new(schema.name.clone(), fields))
}

fn decode_field(
    spec: &FieldSpec,
    value: &Value,
    path: &str,
    violations: &mut Vec<Violation>,
) -> Option<FieldValue> {
    let kind = spec.kind;
    match spec.rank {
        0 => decode_scalar(kind, value, path, violations).map(FieldValue::Scalar),
        1 => decode_list(value, path, violations, |v, p, out| {
            decode_scalar(kind, v, p, out)
        })
        .map(FieldValue::Array),
        2 => decode_list(value, path, violations, |row, p, out| {
            decode_list(row, p, out, |v, p, out| decode_scalar(kind, v, p, out))
        })
        .map(FieldValue::Matrix),
        _ => decode_list(value, path, violations, |plane, p, out| {
            decode_list(plane, p, out, |row, p, out| {
                decode_list(row, p, out, |v, p, out| decode_scalar(kind, v, p, out))
            })
        })
        .map(FieldValue::Tensor),
    }
}

/// Decode a JSON array element by element. Keeps going past bad elements so
/// that all of them are reported.
fn decode_list<T>(
    value: &Value,
    path: &str,
    violations: &mut Vec<Violation>,
    mut element: impl FnMut(&Value, &str, &mut Vec<Violation>) -> Option<T>,
) -> Option<Vec<T>> {
    let Some(items) = value.as_array() else {
        violations.push(Violation::new(
            path,
            format!("expected an array, found {}", json_type(value)),
        ));
        return None;
    };

    let mut decoded = Vec::with_capacity(items.len());
    let mut complete = true;
    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{path}/{index}");
        match element(item, &item_path, violations) {
            Some(v) => decoded.push(v),
            None => complete = false,
        }
    }
    complete.then_some(decoded)
}

fn decode_scalar(
    kind: ScalarKind,
    value: &Value,
    path: &str,
    violations: &mut Vec<Violation>,
) -> Option<Scalar> {
    let decoded = match kind {
        ScalarKind::Bool => value.as_bool().map(Scalar::Bool),
        ScalarKind::Int => match value {
            Value::Number(n) if n.is_i64() => n.as_i64().map(Scalar::Int),
            Value::Number(n) if n.is_u64() => {
                violations.push(Violation::new(path, format!("integer {n} out of range")));
                return None;
            }
            _ => None,
        },
        ScalarKind::Real => value.as_f64().map(Scalar::Real),
        ScalarKind::Complex => decode_complex(value).map(Scalar::Complex),
        ScalarKind::Text => value.as_str().map(|s| Scalar::Text(s.to_string())),
    };

    if decoded.is_none() {
        violations.push(Violation::new(
            path,
            format!("expected {kind}, found {}", json_type(value)),
        ));
    }
    decoded
}

fn decode_complex(value: &Value) -> Option<Complex> {
    match value {
        Value::Array(parts) => match parts.as_slice() {
            [re, im] => Some(Complex::new(re.as_f64()?, im.as_f64()?)),
            _ => None,
        },
        Value::Object(parts) if parts.len() == 2 => Some(Complex::new(
            parts.get("re")?.as_f64()?,
            parts.get("im")?.as_f64()?,
        )),
        _ => None,
    }
}

/// RFC 6901 escaping for one reference token.
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "real",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Storage;
    use bmx_core::DeepEq;
    use serde_json::json;

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "sample",
            vec![
                FieldSpec::new("flag", ScalarKind::Bool, 0, Storage::Value),
                FieldSpec::new("count", ScalarKind::Int, 0, Storage::Pointer),
                FieldSpec::new("z", ScalarKind::Complex, 1, Storage::Value),
                FieldSpec::new("names", ScalarKind::Text, 1, Storage::Allocatable),
                FieldSpec::new("grid", ScalarKind::Real, 2, Storage::Value),
                FieldSpec::new("cube", ScalarKind::Int, 3, Storage::Pointer),
            ],
        )
        .unwrap()
    }

    fn violations(err: SchemaError) -> Vec<String> {
        match err {
            SchemaError::DecodeFailed {
                violations, count, ..
            } => {
                assert_eq!(count, violations.len());
                violations.iter().map(ToString::to_string).collect()
            }
            other => panic!("expected decode failure, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_full_document() {
        let doc = json!({
            "flag": true,
            "count": 4,
            "z": [[1.0, 2.0], {"re": 0.5, "im": -1}],
            "names": ["q1", "q2"],
            "grid": [[1, 2.5], []],
            "cube": [[[1], [2, 3]]],
        });
        let record = decode_record(&schema(), &doc).unwrap();
        assert_eq!(record.record_name(), "sample");
        assert_eq!(record.fields().len(), 6);
        assert_eq!(
            record.get("z"),
            Some(&FieldValue::Array(vec![
                Scalar::Complex(Complex::new(1.0, 2.0)),
                Scalar::Complex(Complex::new(0.5, -1.0)),
            ]))
        );
        assert_eq!(
            record.get("grid"),
            Some(&FieldValue::Matrix(vec![
                vec![Scalar::Real(1.0), Scalar::Real(2.5)],
                vec![],
            ]))
        );
        assert_eq!(record.get("cube").map(FieldValue::rank), Some(3));
    }

    #[test]
    fn test_nullable_fields_may_be_missing_or_null() {
        let doc = json!({
            "flag": false,
            "count": null,
            "z": [],
            "grid": [],
        });
        let record = decode_record(&schema(), &doc).unwrap();
        assert!(record.get("count").is_none());
        assert!(record.get("names").is_none());
        assert!(record.get("cube").is_none());
        assert_eq!(record.fields().len(), 6);
    }

    #[test]
    fn test_required_fields() {
        let err = decode_record(&schema(), &json!({"flag": null, "z": []})).unwrap_err();
        assert_eq!(
            violations(err),
            vec![
                "/flag: field has value storage and cannot be null",
                "/grid: required field is missing",
            ]
        );
    }

    #[test]
    fn test_all_violations_collected() {
        let doc = json!({
            "flag": 1,
            "z": [[1.0], "x"],
            "grid": [[1.0], 2.0, [true]],
            "cube": [[[1.5]]],
            "extra": 0,
        });
        let found = violations(decode_record(&schema(), &doc).unwrap_err());
        assert_eq!(
            found,
            vec![
                "/flag: expected bool, found int",
                "/z/0: expected complex, found array",
                "/z/1: expected complex, found string",
                "/grid/1: expected an array, found real",
                "/grid/2/0: expected real, found bool",
                "/cube/0/0/0: expected int, found real",
                "/extra: unknown field for record sample",
            ]
        );
    }

    #[test]
    fn test_unknown_field_pointer_is_escaped() {
        let doc = json!({
            "flag": true,
            "z": [],
            "grid": [],
            "x/y": 0,
            "t~1": 0,
        });
        let found = violations(decode_record(&schema(), &doc).unwrap_err());
        assert_eq!(
            found,
            vec![
                "/t~01: unknown field for record sample",
                "/x~1y: unknown field for record sample",
            ]
        );
    }

    #[test]
    fn test_integer_range() {
        let doc = json!({"flag": true, "count": u64::MAX, "z": [], "grid": []});
        let found = violations(decode_record(&schema(), &doc).unwrap_err());
        assert_eq!(
            found,
            vec![format!("/count: integer {} out of range", u64::MAX)]
        );
    }

    #[test]
    fn test_not_an_object() {
        let found = violations(decode_record(&schema(), &json!([1, 2])).unwrap_err());
        assert_eq!(found, vec!["/: expected an object, found array"]);
    }

    #[test]
    fn test_decoded_records_compare() {
        let doc = json!({"flag": true, "z": [[0.0, 1.0]], "grid": [[1.0], [2.0, 3.0]]});
        let a = decode_record(&schema(), &doc).unwrap();
        let b = decode_record(&schema(), &doc).unwrap();
        assert!(a.deep_eq(&b));

        let changed = json!({"flag": true, "z": [[0.0, 1.0]], "grid": [[1.0], [2.0]]});
        let c = decode_record(&schema(), &changed).unwrap();
        assert!(!a.deep_eq(&c));
        assert_eq!(
            bmx_core::first_difference(&a, &c).unwrap().to_string(),
            "grid[1]: length 2 != 1"
        );
    }
}
