//! Named column groups over named tables.
//!
//! A [`Grouper`] holds two registries: column groups (a name for a list of
//! column names) and tables (for example `train`, `val`, `test`). A selection
//! resolves one query against each and returns the chosen columns of the
//! chosen tables stacked row-wise.
//!
//! ```
//! use gander_group::Grouper;
//! use gander_table::Table;
//!
//! let train = Table::from_columns([("a", vec![1i64]), ("y", vec![0i64])])?;
//! let test = Table::from_columns([("a", vec![2i64])])?;
//!
//! let grouper = Grouper::new()
//!     .with_column_group("x", ["a"])
//!     .with_table("train", train)
//!     .with_table("test", test);
//!
//! let x = grouper.select("x", ())?;
//! assert_eq!(x.column_names(), ["a"]);
//! assert_eq!(x.len(), 2);
//! # Ok::<(), gander_foundation::Error>(())
//! ```

use std::collections::BTreeSet;

use gander_foundation::Result;
use gander_table::Table;
use log::debug;

use crate::query::Query;
use crate::registry::{Registry, resolve};

/// Named column groups and named tables.
#[derive(Clone, Debug, Default)]
pub struct Grouper {
    column_groups: Registry<Vec<String>>,
    tables: Registry<Table>,
}

impl Grouper {
    /// Creates an empty grouper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to register a column group.
    #[must_use]
    pub fn with_column_group<I, S>(mut self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_column_group(name, columns);
        self
    }

    /// Builder method to register a table.
    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, table: Table) -> Self {
        self.add_table(name, table);
        self
    }

    /// Registers or replaces a column group.
    pub fn add_column_group<I, S>(&mut self, name: impl Into<String>, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_groups
            .insert(name, columns.into_iter().map(Into::into).collect());
    }

    /// Registers or replaces a table.
    pub fn add_table(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name, table);
    }

    /// Returns the column group registry.
    #[must_use]
    pub fn column_groups(&self) -> &Registry<Vec<String>> {
        &self.column_groups
    }

    /// Returns the table registry.
    #[must_use]
    pub fn tables(&self) -> &Registry<Table> {
        &self.tables
    }

    /// Resolves a column group query to column names.
    ///
    /// A single group is returned as declared; anything else is the sorted,
    /// de-duplicated union of the selected groups.
    ///
    /// # Errors
    ///
    /// Returns a key-not-found error for unknown group names.
    pub fn select_columns(&self, query: impl Into<Query>) -> Result<Vec<String>> {
        resolve(&self.column_groups, &query.into(), union_sorted)
    }

    /// Resolves a table query to one table, concatenating several row-wise.
    ///
    /// # Errors
    ///
    /// Returns a key-not-found error for unknown table names.
    pub fn select_tables(&self, query: impl Into<Query>) -> Result<Table> {
        resolve(&self.tables, &query.into(), |tables| Table::concat(tables))
    }

    /// Selects the columns of `column_group` from the rows of `table_group`.
    ///
    /// # Errors
    ///
    /// Returns a key-not-found error for unknown group or table names, and a
    /// column-not-found error when a selected column is absent from the
    /// combined table.
    pub fn select(
        &self,
        column_group: impl Into<Query>,
        table_group: impl Into<Query>,
    ) -> Result<Table> {
        let column_group = column_group.into();
        let table_group = table_group.into();
        let columns = self.select_columns(column_group.clone())?;
        let table = self.select_tables(table_group.clone())?;
        debug!(
            "select columns {column_group} ({} names) from tables {table_group} ({} rows)",
            columns.len(),
            table.len()
        );
        table.select(columns.as_slice())
    }
}

/// Sorted, de-duplicated union of column name lists.
#[must_use]
pub fn union_sorted(groups: Vec<&Vec<String>>) -> Vec<String> {
    groups
        .into_iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
