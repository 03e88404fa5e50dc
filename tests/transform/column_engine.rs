//! Integration tests for the column transform engine

use gander_foundation::{ErrorKind, Value};
use gander_table::{Column, Table};
use gander_transform::{ColumnFn, ColumnTransformConfig, register_column_transform};

use crate::init_logging;

fn scores() -> Table {
    Table::from_columns([
        ("score", Column::from(vec![Value::Float(2.0), Value::Float(4.0), Value::Nil, Value::Float(6.0)])),
        ("weight", Column::from(vec![1i64, 1, 1, 2])),
    ])
    .unwrap()
}

#[test]
fn standardize_column() {
    init_logging();
    let mut t = scores();
    let f = ColumnFn::new("z", ["score"], |cols| {
        let score = cols.column("score")?;
        let (mean, std) = (score.mean()?, score.std()?);
        Ok(score
            .map(|v| v.as_number().map_or(Value::Nil, |x| Value::Float((x - mean) / std)))
            .into())
    });
    register_column_transform(&mut t, &f, &ColumnTransformConfig::default()).unwrap();
    assert_eq!(
        t.column("z").unwrap().to_vec(),
        vec![Value::Float(-1.0), Value::Float(0.0), Value::Nil, Value::Float(1.0)]
    );
}

#[test]
fn scalar_result_broadcasts() {
    init_logging();
    let mut t = scores();
    let f = ColumnFn::new("n", ["score"], |cols| {
        Ok(Value::Int(i64::try_from(cols.column("score")?.count()).unwrap_or(i64::MAX)).into())
    });
    register_column_transform(&mut t, &f, &ColumnTransformConfig::default()).unwrap();
    assert_eq!(t.column("n").unwrap(), &Column::filled(&Value::Int(3), 4));
}

#[test]
fn function_sees_columns_in_row_order() {
    init_logging();
    let mut t = scores();
    let f = ColumnFn::new("weighted", ["score", "weight"], |cols| {
        let out = cols.column("score")?.zip_with(cols.column("weight")?, |s, w| {
            Ok(match (s.as_number(), w.as_number()) {
                (Some(s), Some(w)) => Value::Float(s * w),
                _ => Value::Nil,
            })
        })?;
        Ok(out.into())
    });
    register_column_transform(&mut t, &f, &ColumnTransformConfig::default()).unwrap();
    assert_eq!(
        t.column("weighted").unwrap().to_vec(),
        vec![Value::Float(2.0), Value::Float(4.0), Value::Nil, Value::Float(12.0)]
    );
}

#[test]
fn conflict_without_overwrite() {
    init_logging();
    let mut t = scores();
    let before = t.clone();
    let f = ColumnFn::new("score", ["weight"], |cols| Ok(cols.column("weight")?.clone().into()));
    let err = register_column_transform(&mut t, &f, &ColumnTransformConfig::default().with_overwrite(false))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ColumnConflict { .. }));
    assert_eq!(t, before);

    register_column_transform(&mut t, &f, &ColumnTransformConfig::default()).unwrap();
    assert_eq!(t.column_names(), ["score", "weight"]);
    assert_eq!(t.column("score"), t.column("weight"));
}

#[test]
fn wrong_length_is_rejected() {
    init_logging();
    let mut t = scores();
    let f = ColumnFn::new("head", ["score"], |cols| Ok(cols.column("score")?.slice(0..2).into()));
    let err = register_column_transform(&mut t, &f, &ColumnTransformConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LengthMismatch { .. }));
    assert!(!t.contains_column("head"));
}
