//! Tables of named, ordered columns.
//!
//! A [`Table`] keeps its columns in a stable order, every column the same
//! length as the row [`Index`]. Mutation only ever adds, replaces, renames,
//! or drops whole columns; rows are never added or removed in place.

use std::collections::HashSet;
use std::ops::Range;

use gander_foundation::{Error, ErrorKind, Result, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::index::Index;
use crate::row::Row;

/// An ordered collection of named columns with aligned rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    index: Index,
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Creates an empty table with no rows and no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, column)` pairs, in order.
    ///
    /// The index is `0..len`.
    ///
    /// # Errors
    ///
    /// Returns an error if a name repeats or the columns differ in length.
    pub fn from_columns<I, N, C>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<Column>,
    {
        let mut table = Self::new();
        for (name, column) in columns {
            let name = name.into();
            if table.contains_column(&name) {
                return Err(Error::new(ErrorKind::DuplicateColumn(name)));
            }
            table.set_column(name, column)?;
        }
        Ok(table)
    }

    /// Replaces the row labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the index length differs from the row count.
    pub fn with_index(mut self, index: Index) -> Result<Self> {
        if !self.columns.is_empty() && index.len() != self.len() {
            return Err(Error::length_mismatch("<index>", self.len(), index.len()));
        }
        self.index = index;
        Ok(self)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the row labels.
    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Returns true if a column with this name exists.
    #[must_use]
    pub fn contains_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the position of a column.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Gets a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|pos| &self.columns[pos])
    }

    /// Iterates `(name, column)` pairs in order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }

    /// Gets a single cell.
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.column(column).and_then(|c| c.get(row))
    }

    /// Assigns a column, replacing an existing one in place or appending a new one.
    ///
    /// A table with no columns and no rows adopts the column's length.
    ///
    /// # Errors
    ///
    /// Returns an error if the column length differs from the row count.
    pub fn set_column(&mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.columns.is_empty() && self.index.is_empty() {
            self.index = Index::range(column.len());
        } else if column.len() != self.len() {
            return Err(Error::length_mismatch(name, self.len(), column.len()));
        }

        match self.position(&name) {
            Some(pos) => self.columns[pos] = column,
            None => {
                self.names.push(name);
                self.columns.push(column);
            }
        }
        Ok(())
    }

    /// Removes a column and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist.
    pub fn drop_column(&mut self, name: &str) -> Result<Column> {
        let pos = self
            .position(name)
            .ok_or_else(|| Error::column_not_found(vec![name.to_string()]))?;
        self.names.remove(pos);
        Ok(self.columns.remove(pos))
    }

    /// Replaces every column name, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the count differs from the width or a name repeats.
    pub fn rename_columns<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.width() {
            return Err(Error::length_mismatch("<columns>", self.width(), names.len()));
        }
        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(Error::new(ErrorKind::DuplicateColumn(name.clone())));
            }
        }
        self.names = names;
        Ok(())
    }

    /// Returns a view of one row.
    #[must_use]
    pub fn row(&self, position: usize) -> Option<Row<'_>> {
        (position < self.len()).then(|| Row::new(self, position))
    }

    /// Iterates row views in table order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.len()).map(move |pos| Row::new(self, pos))
    }

    /// Returns a table holding only the named columns, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error listing every name that is not a column, or if a name repeats.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Table> {
        let missing: Vec<String> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|n| !self.contains_column(n))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(Error::column_not_found(missing));
        }

        let mut selected = Table {
            index: self.index.clone(),
            names: Vec::with_capacity(names.len()),
            columns: Vec::with_capacity(names.len()),
        };
        for name in names.iter().map(AsRef::as_ref) {
            if selected.contains_column(name) {
                return Err(Error::new(ErrorKind::DuplicateColumn(name.to_string())));
            }
            if let Some(column) = self.column(name) {
                selected.names.push(name.to_string());
                selected.columns.push(column.clone());
            }
        }
        Ok(selected)
    }

    /// Concatenates tables by row.
    ///
    /// Columns are the union of all inputs in first-seen order; a table
    /// lacking a column contributes nil cells. Index labels are kept as-is.
    #[must_use]
    pub fn concat<'a, I>(tables: I) -> Table
    where
        I: IntoIterator<Item = &'a Table>,
    {
        let tables: Vec<&Table> = tables.into_iter().collect();

        let mut names: Vec<String> = Vec::new();
        for table in &tables {
            for name in &table.names {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }

        let mut index = Index::default();
        let mut columns = vec![Column::new(); names.len()];
        for table in &tables {
            index = index.concat(&table.index);
            for (name, column) in names.iter().zip(columns.iter_mut()) {
                let part = table
                    .column(name)
                    .cloned()
                    .unwrap_or_else(|| Column::filled(&Value::Nil, table.len()));
                *column = column.concat(&part);
            }
        }

        Table {
            index,
            names,
            columns,
        }
    }

    /// Returns the rows in `range` as a new table.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Table {
        Table {
            index: self.index.slice(range.clone()),
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.slice(range.clone())).collect(),
        }
    }

    /// Returns the first `n` rows.
    #[must_use]
    pub fn head(&self, n: usize) -> Table {
        self.slice(0..n)
    }

    /// Returns the last `n` rows.
    #[must_use]
    pub fn tail(&self, n: usize) -> Table {
        self.slice(self.len().saturating_sub(n)..self.len())
    }
}
