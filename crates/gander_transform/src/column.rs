//! Column-wise transform engine.

use gander_foundation::{Error, Result};
use gander_table::{Column, Table};
use log::debug;

use crate::config::ColumnTransformConfig;
use crate::function::{ColumnArgs, ColumnFn, ColumnOutput};
use crate::validate;

/// Invokes `func` once with whole columns and stores the result in a column
/// named after it.
///
/// A scalar result is broadcast to every row. No coercion or fallback is
/// applied.
///
/// # Errors
///
/// Returns validation errors before invoking `func`, any error `func`
/// returns, or a length mismatch when the output column has the wrong length.
/// On any error the table is left untouched.
pub fn register_column_transform(
    table: &mut Table,
    func: &ColumnFn,
    config: &ColumnTransformConfig,
) -> Result<()> {
    validate::registration(
        func.name(),
        func.params().iter().map(String::as_str),
        table,
        config.overwrite,
    )?;

    let columns: Vec<Column> = func
        .params()
        .iter()
        .filter_map(|name| table.column(name).cloned())
        .collect();

    debug!(
        "column transform `{}` over {} columns x {} rows",
        func.name(),
        columns.len(),
        table.len()
    );

    let output = match func.call(&ColumnArgs::new(func.params(), columns))? {
        ColumnOutput::Column(column) if column.len() != table.len() => {
            return Err(Error::length_mismatch(func.name(), table.len(), column.len()));
        }
        ColumnOutput::Column(column) => column,
        ColumnOutput::Scalar(value) => Column::filled(&value, table.len()),
    };
    table.set_column(func.name(), output)
}
