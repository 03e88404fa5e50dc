//! Integration tests for column name normalization

use gander_table::{Table, dedupe_names, normalize_column_name};

#[test]
fn reference_label() {
    assert_eq!(normalize_column_name("  0123 aBc "), "_0123_abc");
}

#[test]
fn duplicates_get_suffixes() {
    assert_eq!(dedupe_names(["x", "x"]), ["x", "x_1"]);
}

#[test]
fn table_normalization_dedupes_collisions() {
    let mut t = Table::from_columns([
        ("Sales Total", vec![1i64]),
        ("sales_total", vec![2i64]),
        ("SALES  TOTAL!", vec![3i64]),
        ("2024 Q1", vec![4i64]),
    ])
    .unwrap();
    t.normalize_column_names().unwrap();
    assert_eq!(
        t.column_names(),
        ["sales_total", "sales_total_1", "sales_total_2", "_2024_q1"]
    );
    assert_eq!(t.get(0, "sales_total_2").and_then(|v| v.as_int()), Some(3));
}
