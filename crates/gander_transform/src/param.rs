//! Declared transform parameters and bound argument lists.
//!
//! A [`Param`] is the Rust stand-in for one entry of a function signature:
//! a name that must match a table column, an optional declared [`Type`], and
//! an optional default used when the cell is absent or fails to convert.

use gander_foundation::{Error, Result, Type, Value};

/// One declared parameter of a row transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    /// Parameter name; also the column it reads.
    pub name: String,
    /// Declared type, if any.
    pub ty: Option<Type>,
    /// Default value, if any.
    pub default: Option<Value>,
}

impl Param {
    /// Creates an untyped parameter with no default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
        }
    }

    /// Creates a typed parameter with no default.
    #[must_use]
    pub fn required(name: impl Into<String>, ty: Type) -> Self {
        Self::new(name).typed(ty)
    }

    /// Creates a typed parameter with a default.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: Type, default: impl Into<Value>) -> Self {
        Self::new(name).typed(ty).with_default(default)
    }

    /// Sets the declared type.
    #[must_use]
    pub fn typed(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl From<&str> for Param {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Bound arguments for one invocation, in declared parameter order.
#[derive(Clone, Debug)]
pub struct Args<'p> {
    params: &'p [Param],
    values: Vec<Value>,
}

impl<'p> Args<'p> {
    /// Pairs declared parameters with their bound values.
    #[must_use]
    pub(crate) fn new(params: &'p [Param], values: Vec<Value>) -> Self {
        debug_assert_eq!(params.len(), values.len());
        Self { params, values }
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets an argument by position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    /// Gets an argument by parameter name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .position(|p| p.name == name)
            .map(|pos| &self.values[pos])
    }

    /// Iterates `(name, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params
            .iter()
            .map(|p| p.name.as_str())
            .zip(self.values.iter())
    }

    /// Gets an argument by name, failing if it was not declared.
    ///
    /// # Errors
    ///
    /// Returns a key-not-found error for an undeclared name.
    pub fn value(&self, name: &str) -> Result<&Value> {
        self.get(name)
            .ok_or_else(|| Error::key_not_found(vec![name.to_string()]))
    }

    /// Gets an integer argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is undeclared or the value is not an int.
    pub fn int(&self, name: &str) -> Result<i64> {
        let value = self.value(name)?;
        value
            .as_int()
            .ok_or_else(|| Error::type_mismatch(Type::Int, value.value_type()))
    }

    /// Gets a numeric argument as `f64` (ints are widened).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is undeclared or the value is not numeric.
    pub fn float(&self, name: &str) -> Result<f64> {
        let value = self.value(name)?;
        value
            .as_number()
            .ok_or_else(|| Error::type_mismatch(Type::Float, value.value_type()))
    }

    /// Gets a string argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is undeclared or the value is not a string.
    pub fn str(&self, name: &str) -> Result<&str> {
        let value = self.value(name)?;
        value
            .as_str()
            .ok_or_else(|| Error::type_mismatch(Type::String, value.value_type()))
    }

    /// Gets a boolean argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is undeclared or the value is not a bool.
    pub fn bool(&self, name: &str) -> Result<bool> {
        let value = self.value(name)?;
        value
            .as_bool()
            .ok_or_else(|| Error::type_mismatch(Type::Bool, value.value_type()))
    }
}
