//! Integration tests for strict modes applied through the row engine
//!
//! Every test transforms the same column holding an unconvertible value.

use gander_foundation::{ErrorKind, Type, Value};
use gander_table::Table;
use gander_transform::{Param, RowFn, RowTransformConfig, StrictMode, register_row_transform};

use crate::init_logging;

fn table() -> Table {
    Table::from_columns([("b", vec![Value::from("7"), Value::from("x"), Value::Nil])]).unwrap()
}

fn echo(param: Param) -> RowFn {
    RowFn::new("out", [param], |args| Ok(args.at(0).cloned().unwrap_or_default()))
}

fn run(param: Param, mode: StrictMode) -> Result<Vec<Value>, gander_foundation::Error> {
    let mut t = table();
    let config = RowTransformConfig::default().with_strict_mode(mode);
    register_row_transform(&mut t, &echo(param), &config)?;
    Ok(t.column("out").unwrap().to_vec())
}

#[test]
fn default_mode_substitutes_default() {
    init_logging();
    let out = run(Param::new("b").typed(Type::Int).with_default(9), StrictMode::Default).unwrap();
    assert_eq!(out, vec![Value::Int(7), Value::Int(9), Value::Int(9)]);
}

#[test]
fn default_mode_without_default_is_a_configuration_error() {
    init_logging();
    let err = run(Param::new("b").typed(Type::Int), StrictMode::Default).unwrap_err();
    match err.kind {
        ErrorKind::Configuration { function, parameter, value, ty, .. } => {
            assert_eq!(function, "out");
            assert_eq!(parameter, "b");
            assert_eq!(value, Value::from("x"));
            assert_eq!(ty, Type::Int);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn strict_mode_fails_even_with_default() {
    init_logging();
    let err = run(Param::new("b").typed(Type::Int).with_default(9), StrictMode::Strict).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeCoercion { .. }));
    assert_eq!(err.context.and_then(|c| c.row), Some(1));
}

#[test]
fn lenient_mode_passes_raw_value() {
    init_logging();
    let out = run(Param::new("b").typed(Type::Int).with_default(9), StrictMode::Lenient).unwrap();
    assert_eq!(out, vec![Value::Int(7), Value::from("x"), Value::Int(9)]);
}

#[test]
fn absent_values_use_default_in_every_mode() {
    init_logging();
    for mode in [StrictMode::Strict, StrictMode::Lenient, StrictMode::Default] {
        let mut t = Table::from_columns([("b", vec![Value::Nil, Value::Float(f64::NAN)])]).unwrap();
        let f = echo(Param::new("b").typed(Type::Int).with_default(9));
        let config = RowTransformConfig::default().with_strict_mode(mode);
        register_row_transform(&mut t, &f, &config).unwrap();
        assert_eq!(t.column("out").unwrap().to_vec(), vec![Value::Int(9), Value::Int(9)]);
    }
}

#[test]
fn absent_without_default_reaches_the_function() {
    init_logging();
    let mut t = Table::from_columns([("b", vec![Value::Nil])]).unwrap();
    let f = RowFn::new("out", [Param::new("b").typed(Type::Int)], |args| {
        Ok(Value::Bool(args.get("b").is_some_and(Value::is_nil)))
    });
    register_row_transform(&mut t, &f, &RowTransformConfig::default()).unwrap();
    assert_eq!(t.get(0, "out"), Some(&Value::Bool(true)));
}

#[test]
fn untyped_parameters_are_not_coerced() {
    init_logging();
    let out = run(Param::new("b"), StrictMode::Strict).unwrap();
    assert_eq!(out, vec![Value::from("7"), Value::from("x"), Value::Nil]);
}

#[test]
fn strict_mode_from_config_strings() {
    let mode: StrictMode = "default".parse().unwrap();
    assert_eq!(RowTransformConfig::default().with_strict_mode(mode), RowTransformConfig::default());
}
