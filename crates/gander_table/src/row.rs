//! Borrowed row views.

use gander_foundation::Value;

use crate::table::Table;

/// A view of one row of a [`Table`].
///
/// Rows are transient: they borrow the table and are materialized on demand.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    table: &'a Table,
    position: usize,
}

impl<'a> Row<'a> {
    pub(crate) fn new(table: &'a Table, position: usize) -> Self {
        Self { table, position }
    }

    /// Returns the row's position in the table.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the row's index label.
    #[must_use]
    pub fn label(&self) -> Option<&'a Value> {
        self.table.index().get(self.position)
    }

    /// Gets the value of a named field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.table.column(name).and_then(|c| c.get(self.position))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.width()
    }

    /// Returns true if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.width() == 0
    }

    /// Iterates `(name, value)` fields in column order.
    pub fn iter(self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        let position = self.position;
        self.table
            .columns()
            .filter_map(move |(name, column)| column.get(position).map(|v| (name, v)))
    }
}
