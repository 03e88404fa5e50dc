//! Integration tests for Value
//!
//! Tests absence, truthiness, display, equality, and conversions.

use gander_foundation::{Type, Value};

// =============================================================================
// Absence and Truthiness
// =============================================================================

#[test]
fn nil_and_nan_are_absent() {
    assert!(Value::Nil.is_absent());
    assert!(Value::Float(f64::NAN).is_absent());
    assert!(!Value::Float(0.0).is_absent());
    assert!(!Value::from("").is_absent());
}

#[test]
fn truthiness() {
    for falsy in [
        Value::Nil,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
        Value::from(Vec::<i64>::new()),
    ] {
        assert!(!falsy.is_truthy(), "{falsy:?} should be falsy");
    }
    assert!(Value::from("0").is_truthy());
    assert!(Value::Int(-1).is_truthy());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_forms() {
    assert_eq!(Value::Int(3).to_string(), "3");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::from("hi").to_string(), "hi");
    assert_eq!(Value::Bool(true).to_string(), "true");
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn from_impls() {
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(None::<i64>), Value::Nil);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
    assert_eq!(Value::from(vec![1i64, 2]).value_type(), Type::List);
}

#[test]
fn cross_type_numeric_ordering() {
    assert!(Value::Int(1) < Value::Float(1.5));
    assert!(Value::Float(2.5) > Value::Int(2));
}
