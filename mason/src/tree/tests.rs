//! Unit tests for the document tree adapter.

use std::collections::BTreeMap;

use rstest::rstest;
use serde_json::{Value, json};

use super::{NodeKind, from_tree, round_trip, short_type_name, to_tree};
use crate::MasonError;

#[rstest]
#[case::null(json!(null), NodeKind::Null)]
#[case::array(json!([]), NodeKind::Array)]
#[case::object(json!({}), NodeKind::Object)]
#[case::string(json!("s"), NodeKind::Scalar)]
#[case::number(json!(1.5), NodeKind::Scalar)]
#[case::boolean(json!(false), NodeKind::Scalar)]
fn classifies_present_nodes(#[case] node: Value, #[case] expected: NodeKind) {
    assert_eq!(NodeKind::of(Some(&node)), expected);
}

#[test]
fn classifies_object_fields() {
    let node = json!({"a": null, "b": 1});
    let object = node.as_object().expect("object literal");
    assert_eq!(NodeKind::field(object, "a"), NodeKind::Null);
    assert_eq!(NodeKind::field(object, "b"), NodeKind::Scalar);
    assert_eq!(NodeKind::field(object, "c"), NodeKind::Missing);
    assert!(NodeKind::Missing.is_absent() && NodeKind::Null.is_absent());
    assert!(!NodeKind::Scalar.is_absent());
}

#[test]
fn object_trees_keep_insertion_order() {
    let mut map = serde_json::Map::new();
    map.insert("zeta".to_owned(), json!(1));
    map.insert("alpha".to_owned(), json!(2));
    let keys: Vec<_> = Value::Object(map)
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["zeta".to_owned(), "alpha".to_owned()]);
}

#[test]
fn round_trip_produces_independent_copy() {
    let mut source = BTreeMap::from([("k".to_owned(), vec![1_u8, 2])]);
    let copy = round_trip(&source).expect("map round trips");
    source.entry("k".to_owned()).or_default().push(3);
    assert_eq!(copy.get("k"), Some(&vec![1, 2]));
}

#[test]
fn decode_failure_names_target_type() {
    let err = from_tree::<Vec<u8>>(json!({"not": "a list"})).expect_err("shape mismatch");
    assert!(err.is_serialization());
    assert!(
        matches!(&*err, MasonError::Serialization { operation, .. } if operation == "decode Vec"),
        "unexpected error: {err}"
    );
}

#[test]
fn encode_failure_is_a_serialization_error() {
    let keyed = BTreeMap::from([((1_u8, 2_u8), "tuple keys are not strings")]);
    let err = to_tree(&keyed).expect_err("tuple keys rejected");
    assert!(err.is_serialization());
}

#[test]
fn short_names_strip_paths_and_generics() {
    assert_eq!(short_type_name::<Vec<String>>(), "Vec");
    assert_eq!(short_type_name::<NodeKind>(), "NodeKind");
}
