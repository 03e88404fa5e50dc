//! Transform function definitions.
//!
//! Rust closures carry no runtime signature, so each transform is declared
//! explicitly: a name (which is also the output column), its parameters, and
//! the closure. The declaration is built once and reused for every row.

use std::fmt;
use std::sync::Arc;

use gander_foundation::{Error, Result, Value};
use gander_table::Column;

use crate::param::{Args, Param};

/// Closure signature for row transforms.
pub type RowClosure = dyn Fn(&Args<'_>) -> Result<Value> + Send + Sync;

/// Closure signature for column transforms.
pub type ColumnClosure = dyn Fn(&ColumnArgs<'_>) -> Result<ColumnOutput> + Send + Sync;

/// A row-wise transform: called once per row with scalar arguments.
#[derive(Clone)]
pub struct RowFn {
    name: String,
    params: Vec<Param>,
    func: Arc<RowClosure>,
}

impl RowFn {
    /// Declares a row transform.
    pub fn new<I, P, F>(name: impl Into<String>, params: I, func: F) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
        F: Fn(&Args<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            func: Arc::new(func),
        }
    }

    /// Returns the transform name (the output column).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared parameters in order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Gets a declared parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Invokes the closure.
    ///
    /// # Errors
    ///
    /// Returns whatever error the closure reports.
    pub fn call(&self, args: &Args<'_>) -> Result<Value> {
        (self.func)(args)
    }
}

impl fmt::Debug for RowFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowFn")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// A column-wise transform: called once with whole columns.
#[derive(Clone)]
pub struct ColumnFn {
    name: String,
    params: Vec<String>,
    func: Arc<ColumnClosure>,
}

impl ColumnFn {
    /// Declares a column transform.
    pub fn new<I, S, F>(name: impl Into<String>, params: I, func: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&ColumnArgs<'_>) -> Result<ColumnOutput> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            func: Arc::new(func),
        }
    }

    /// Returns the transform name (the output column).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter names in order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Invokes the closure.
    ///
    /// # Errors
    ///
    /// Returns whatever error the closure reports.
    pub fn call(&self, args: &ColumnArgs<'_>) -> Result<ColumnOutput> {
        (self.func)(args)
    }
}

impl fmt::Debug for ColumnFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnFn")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Whole-column arguments for one column transform invocation.
#[derive(Clone, Debug)]
pub struct ColumnArgs<'p> {
    names: &'p [String],
    columns: Vec<Column>,
}

impl<'p> ColumnArgs<'p> {
    /// Pairs parameter names with their columns.
    #[must_use]
    pub(crate) fn new(names: &'p [String], columns: Vec<Column>) -> Self {
        debug_assert_eq!(names.len(), columns.len());
        Self { names, columns }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Gets a column by position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    /// Gets a column by parameter name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|pos| &self.columns[pos])
    }

    /// Gets a column by name, failing if it was not declared.
    ///
    /// # Errors
    ///
    /// Returns a key-not-found error for an undeclared name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.get(name)
            .ok_or_else(|| Error::key_not_found(vec![name.to_string()]))
    }
}

/// The result of a column transform.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnOutput {
    /// A full column, which must match the table's row count.
    Column(Column),
    /// A single value broadcast to every row.
    Scalar(Value),
}

impl From<Column> for ColumnOutput {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Value> for ColumnOutput {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for ColumnOutput {
    fn from(values: Vec<T>) -> Self {
        Self::Column(Column::from(values))
    }
}
