use arrayhelpers::prelude::*;
use arrayhelpers::{CrossReference, KeyedCollection};
use serde_json::{Map, Value, json};
use std::collections::{BTreeSet, HashMap, HashSet};

fn json_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_json_object_missing_and_extra() {
    let data = json_map(json!({
        "a": "a value",
        "b": "b value",
        "c": "c value",
        "d": "d value",
    }));

    let result = cross_reference(&keys(&["a", "b", "d", "e"]), &data);

    assert_eq!(result.missing, keys(&["e"]));
    assert_eq!(result.extra, keys(&["c"]));
    assert!(!result.is_consistent());
}

#[test]
fn test_sequence_keyed_by_index() {
    let data = vec!["a value", "b value", "c value", "d value"];

    let result = cross_reference(&[0, 1, 3, 10], &data);
    assert_eq!(result.missing, vec![10]);
    assert_eq!(result.extra, vec![2]);

    let result = cross_reference(&[0, 1, 3, 10], &data[..2]);
    assert_eq!(result.missing, vec![3, 10]);
    assert!(result.extra.is_empty());
}

#[test]
fn test_duplicate_reference_keys_reported_once() {
    let data = json_map(json!({ "a": 1, "b": 2 }));

    let result = cross_reference(&keys(&["e", "a", "e", "f", "e"]), &data);

    assert_eq!(result.missing, keys(&["e", "f"]));
    assert_eq!(result.extra, keys(&["b"]));
}

#[test]
fn test_exact_keys_are_consistent() {
    let data = json_map(json!({ "x": null, "y": [1, 2], "z": {} }));

    let result = cross_reference(&keys(&["z", "x", "y", "x"]), &data);

    assert_eq!(
        result,
        CrossReference {
            missing: vec![],
            extra: vec![]
        }
    );
    assert!(result.is_consistent());
}

#[test]
fn test_empty_reference_and_empty_data() {
    let empty: Vec<u8> = vec![];
    assert!(cross_reference(&[], &empty).is_consistent());

    let result = cross_reference(&[0, 2], &empty);
    assert_eq!(result.missing, vec![0, 2]);
    assert!(result.extra.is_empty());

    let result = cross_reference(&[], &vec!['a', 'b']);
    assert!(result.missing.is_empty());
    assert_eq!(result.extra, vec![0, 1]);
}

#[test]
fn test_hash_map_adapter() {
    let data: HashMap<&str, u32> = HashMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

    let mut result = cross_reference(&["d", "e", "a", "f"], &data);
    result.extra.sort_unstable();

    assert_eq!(result.missing, vec!["e", "f"]);
    assert_eq!(result.extra, vec!["b", "c"]);
    assert!(data.has_key(&"a"));
    assert!(!data.has_key(&"e"));
}

#[test]
fn test_set_adapters() {
    let hashed: HashSet<u32> = HashSet::from([1, 2, 3, 5, 8]);
    let mut result = cross_reference(&[1, 2, 4], &hashed);
    result.extra.sort_unstable();
    assert_eq!(result.missing, vec![4]);
    assert_eq!(result.extra, vec![3, 5, 8]);

    let ordered: BTreeSet<&str> = BTreeSet::from(["pear", "apple", "fig"]);
    let result = cross_reference(&["fig", "kiwi"], &ordered);
    assert_eq!(result.missing, vec!["kiwi"]);
    // Set elements come out in the set's own order.
    assert_eq!(result.extra, vec!["apple", "pear"]);
    assert_eq!(ordered.key_iter().count(), 3);
}
