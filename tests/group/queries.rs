//! Integration tests for queries and registry resolution

use gander_foundation::{ErrorKind, Value};
use gander_group::{Query, Registry, resolve, union_sorted};

fn groups() -> Registry<Vec<String>> {
    [
        ("x", vec!["c".to_string(), "a".to_string()]),
        ("y", vec!["b".to_string(), "a".to_string()]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn single_key_returns_group_verbatim() {
    let out = resolve(&groups(), &Query::from("x"), union_sorted).unwrap();
    assert_eq!(out, ["c", "a"]);
}

#[test]
fn key_list_returns_sorted_union() {
    let out = resolve(&groups(), &Query::from(vec!["x", "y"]), union_sorted).unwrap();
    assert_eq!(out, ["a", "b", "c"]);
    let all = resolve(&groups(), &Query::All, union_sorted).unwrap();
    assert_eq!(all, out);
}

#[test]
fn unknown_keys_are_reported_together() {
    let err = resolve(&groups(), &Query::from(vec!["x", "p", "q"]), union_sorted).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::KeyNotFound(ref k) if k == &["p", "q"]));
}

#[test]
fn dynamic_queries() {
    let q = Query::from_value(&Value::from(vec!["x"])).unwrap();
    assert_eq!(resolve(&groups(), &q, union_sorted).unwrap(), ["a", "c"]);

    let err = Query::from_value(&Value::Float(1.0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidQuery(_)));
}
