//! Integration tests for Table
//!
//! Tests construction, column assignment, selection, and concatenation.

use gander_foundation::{ErrorKind, Value};
use gander_table::{Column, Index, Table};

fn sample() -> Table {
    Table::from_columns([
        ("a", Column::from(vec![1i64, 2, 3])),
        ("b", Column::from(vec!["x", "y", "z"])),
    ])
    .unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn from_columns_rejects_ragged_input() {
    let err = Table::from_columns([("a", vec![1i64, 2]), ("b", vec![1i64])]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LengthMismatch { .. }));
}

#[test]
fn from_columns_rejects_duplicates() {
    let err = Table::from_columns([("a", vec![1i64]), ("a", vec![2i64])]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateColumn(_)));
}

#[test]
fn custom_index_survives_column_assignment() {
    let mut t = sample()
        .with_index(Index::from_labels(["r1", "r2", "r3"]))
        .unwrap();
    t.set_column("c", vec![0i64, 0, 0]).unwrap();
    assert_eq!(t.index().get(2), Some(&Value::from("r3")));
    assert_eq!(t.row(1).unwrap().label(), Some(&Value::from("r2")));
}

// =============================================================================
// Column Assignment
// =============================================================================

#[test]
fn set_column_appends_then_replaces_in_place() {
    let mut t = sample();
    t.set_column("c", vec![true, false, true]).unwrap();
    assert_eq!(t.column_names(), ["a", "b", "c"]);
    t.set_column("a", vec![9i64, 9, 9]).unwrap();
    assert_eq!(t.column_names(), ["a", "b", "c"]);
    assert_eq!(t.get(0, "a"), Some(&Value::Int(9)));
}

#[test]
fn set_column_checks_length() {
    let mut t = sample();
    let err = t.set_column("c", vec![1i64]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LengthMismatch { expected: 3, actual: 1, .. }));
    assert_eq!(t.width(), 2);
}

// =============================================================================
// Selection and Concatenation
// =============================================================================

#[test]
fn select_reorders_and_reports_missing() {
    let t = sample();
    let s = t.select(&["b", "a"]).unwrap();
    assert_eq!(s.column_names(), ["b", "a"]);
    assert_eq!(s.len(), 3);

    let err = t.select(&["a", "q", "r"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ColumnNotFound(ref m) if m == &["q", "r"]));
}

#[test]
fn concat_unions_columns_and_keeps_labels() {
    let top = sample().head(2);
    let bottom = Table::from_columns([("b", Column::from(vec!["w"])), ("c", Column::from(vec![1.5]))])
        .unwrap()
        .with_index(Index::from_labels([100i64]))
        .unwrap();
    let t = Table::concat([&top, &bottom]);

    assert_eq!(t.column_names(), ["a", "b", "c"]);
    assert_eq!(t.len(), 3);
    assert_eq!(
        t.index().iter().cloned().collect::<Vec<_>>(),
        vec![Value::Int(0), Value::Int(1), Value::Int(100)]
    );
    assert_eq!(t.get(2, "a"), Some(&Value::Nil));
    assert_eq!(t.get(0, "c"), Some(&Value::Nil));
    assert_eq!(t.get(2, "c"), Some(&Value::Float(1.5)));
}

#[test]
fn concat_of_nothing_is_empty() {
    let t = Table::concat(Vec::<&Table>::new());
    assert!(t.is_empty());
    assert_eq!(t.width(), 0);
}

#[test]
fn head_and_tail() {
    let t = sample();
    assert_eq!(t.head(1).get(0, "b"), Some(&Value::from("x")));
    assert_eq!(t.tail(1).get(0, "b"), Some(&Value::from("z")));
    assert_eq!(t.tail(10).len(), 3);
}
