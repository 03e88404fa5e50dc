//! Declared parameter types.
//!
//! A [`Type`] plays the role of a single-argument constructor: [`Type::cast`]
//! converts a raw cell value into the declared type or reports why it cannot.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, ErrorKind};
use crate::value::Value;
use crate::Result;

/// Signature of a user-supplied conversion.
pub type ConvertFn = dyn Fn(&Value) -> Result<Value> + Send + Sync;

/// Type descriptor for declared parameters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type; conversion uses truthiness.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type; conversion renders the value.
    String,
    /// List type.
    List,
    /// Any type (conversion is the identity).
    Any,
    /// A named user-supplied conversion.
    Custom(Converter),
}

/// A named conversion used as a custom declared type.
///
/// Two converters are equal when they share a name and the same function.
#[derive(Clone)]
pub struct Converter {
    name: Arc<str>,
    func: Arc<ConvertFn>,
}

impl Converter {
    /// Creates a converter from a name and a conversion function.
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Returns the converter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the conversion.
    ///
    /// # Errors
    ///
    /// Returns whatever error the conversion function reports.
    pub fn convert(&self, value: &Value) -> Result<Value> {
        (self.func)(value)
    }
}

impl PartialEq for Converter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Eq for Converter {}

impl Hash for Converter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converter({})", self.name)
    }
}

impl Type {
    /// Creates a custom type from a named conversion function.
    pub fn custom<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::Custom(Converter::new(name, func))
    }

    /// Converts a value into this type.
    ///
    /// Built-in conversions:
    /// - `Int` accepts ints, finite floats (truncated), bools, and integer strings
    /// - `Float` accepts ints, floats, bools, and float strings
    /// - `String` and `Bool` accept every value
    /// - `Nil` and `List` only accept values already of that type
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::Cast`] error when the value cannot be converted,
    /// or the custom converter's error.
    pub fn cast(&self, value: &Value) -> Result<Value> {
        match self {
            Self::Any => Ok(value.clone()),
            Self::Bool => Ok(Value::Bool(value.is_truthy())),
            Self::String => match value {
                Value::String(_) => Ok(value.clone()),
                other => Ok(Value::from(other.to_string())),
            },
            Self::Int => self.cast_int(value),
            Self::Float => self.cast_float(value),
            Self::Nil => match value {
                Value::Nil => Ok(Value::Nil),
                other => Err(self.cast_error(other, "only nil converts to nil")),
            },
            Self::List => match value {
                Value::List(_) => Ok(value.clone()),
                other => Err(self.cast_error(other, "not a list")),
            },
            Self::Custom(converter) => converter.convert(value),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn cast_int(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Int(n) => Ok(Value::Int(*n)),
            Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
            Value::Float(n) => {
                if !n.is_finite() {
                    return Err(self.cast_error(value, "cannot convert non-finite float"));
                }
                let truncated = n.trunc();
                if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
                    return Err(self.cast_error(value, "float out of integer range"));
                }
                Ok(Value::Int(truncated as i64))
            }
            Value::String(s) => strip_digit_separators(s.trim())
                .and_then(|digits| digits.parse::<i64>().ok())
                .map(Value::Int)
                .ok_or_else(|| self.cast_error(value, "invalid literal for int")),
            other => Err(self.cast_error(other, "unsupported operand")),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn cast_float(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Float(n) => Ok(Value::Float(*n)),
            Value::Int(n) => Ok(Value::Float(*n as f64)),
            Value::Bool(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
            Value::String(s) => strip_digit_separators(s.trim())
                .and_then(|digits| digits.parse::<f64>().ok())
                .map(Value::Float)
                .ok_or_else(|| self.cast_error(value, "could not convert string to float")),
            other => Err(self.cast_error(other, "unsupported operand")),
        }
    }

    fn cast_error(&self, value: &Value, reason: &str) -> Error {
        Error::new(ErrorKind::Cast {
            ty: self.clone(),
            value: value.clone(),
            reason: reason.to_string(),
        })
    }
}

/// Removes `_` separators placed between digits.
///
/// Returns `None` for empty input or a misplaced separator.
fn strip_digit_separators(s: &str) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, c) in chars.iter().enumerate() {
        if *c == '_' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            let after = chars.get(i + 1);
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
                _ => return None,
            }
        } else {
            out.push(*c);
        }
    }
    Some(out)
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "str"),
            Self::List => write!(f, "list"),
            Self::Any => write!(f, "any"),
            Self::Custom(converter) => write!(f, "{}", converter.name()),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
