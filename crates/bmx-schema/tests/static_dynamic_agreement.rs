//! # Static / Dynamic Agreement
//!
//! The `ttt` description under `schemas/` describes the same layout as
//! `bmx_core::Ttt`. A `Ttt` serialized to JSON and decoded under that
//! description must compare exactly as the static record does, and report
//! the same first difference.

use std::path::PathBuf;

use bmx_core::{first_difference, DeepEq, My, Ttt};
use bmx_schema::{decode_record, DynRecord, RecordSchema, ScalarKind, Storage};

fn schema_path(name: &str) -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates
    dir.pop(); // workspace root
    dir.join("schemas").join(name)
}

fn ttt_schema() -> RecordSchema {
    RecordSchema::load(&schema_path("ttt.yaml")).expect("ttt.yaml should load")
}

fn to_dyn(schema: &RecordSchema, t: &Ttt) -> DynRecord {
    let json = serde_json::to_value(t).expect("Ttt serializes");
    decode_record(schema, &json).expect("serialized Ttt fits its description")
}

fn variants() -> Vec<Ttt> {
    let base = Ttt::default();

    let mut flipped_scalar = base.clone();
    flipped_scalar.i0 = true;

    let mut pointer_set = base.clone();
    pointer_set.ip0 = Some(false);

    let mut allocated_empty = base.clone();
    allocated_empty.ia1 = Some(Vec::new());

    let mut deep = base.clone();
    deep.i3[2][1][0] = true;

    let mut ragged = base.clone();
    ragged.ip2 = Some(vec![vec![true, false], vec![]]);

    let mut ragged_other = base.clone();
    ragged_other.ip2 = Some(vec![vec![true], vec![false]]);

    let mut shorter = base.clone();
    shorter.i1.pop();

    vec![
        base,
        flipped_scalar,
        pointer_set,
        allocated_empty,
        deep,
        ragged,
        ragged_other,
        shorter,
    ]
}

#[test]
fn ttt_description_matches_static_layout() {
    let schema = ttt_schema();
    assert_eq!(schema.name, "ttt");
    let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["i0", "ip0", "ia0", "i1", "ip1", "ia1", "i2", "ip2", "ia2", "i3", "ip3", "ia3"]
    );
    assert!(schema.fields.iter().all(|f| f.kind == ScalarKind::Bool));
    assert_eq!(schema.field("ia3").map(|f| f.storage), Some(Storage::Allocatable));
}

#[test]
fn dynamic_equality_agrees_with_static() {
    let schema = ttt_schema();
    let all = variants();
    for a in &all {
        for b in &all {
            let static_eq = a.deep_eq(b);
            let dynamic_eq = to_dyn(&schema, a).deep_eq(&to_dyn(&schema, b));
            assert_eq!(static_eq, dynamic_eq, "disagreement for {a:?} vs {b:?}");
        }
    }
}

#[test]
fn dynamic_first_difference_path_matches_static() {
    let schema = ttt_schema();
    let all = variants();
    for a in &all {
        for b in &all {
            let s = first_difference(a, b).map(|d| d.path.to_string());
            let d = first_difference(&to_dyn(&schema, a), &to_dyn(&schema, b))
                .map(|d| d.path.to_string());
            assert_eq!(s, d);
        }
    }
}

#[test]
fn my_description_round_trips() {
    let schema = RecordSchema::load(&schema_path("my.yaml")).unwrap();
    let a = to_dyn_my(&schema, &My { a: 7 });
    let b = to_dyn_my(&schema, &My { a: 7 });
    let c = to_dyn_my(&schema, &My { a: 8 });
    assert!(a.deep_eq(&b));
    assert_eq!(first_difference(&a, &c).unwrap().to_string(), "a: 7 != 8");
}

fn to_dyn_my(schema: &RecordSchema, m: &My) -> DynRecord {
    decode_record(schema, &serde_json::to_value(m).unwrap()).unwrap()
}

#[test]
fn ttt_document_rejected_under_my_description() {
    let schema = RecordSchema::load(&schema_path("my.yaml")).unwrap();
    let json = serde_json::to_value(Ttt::default()).unwrap();
    let err = decode_record(&schema, &json).unwrap_err();
    // `a` is missing and all twelve ttt fields are unknown.
    assert!(err.to_string().starts_with("13 violation(s) decoding my"));
}
