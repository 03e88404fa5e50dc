//! Row-wise transform engine.

use gander_foundation::{Result, Value};
use gander_table::{Column, Table};
use log::{debug, trace};

use crate::binder;
use crate::config::RowTransformConfig;
use crate::function::RowFn;
use crate::validate;

/// Applies `func` to every row of `table` and stores the results in a column
/// named after it.
///
/// The column is appended when new and replaced in place otherwise. Row count,
/// index, and the order of existing columns are unchanged.
///
/// # Errors
///
/// Validation errors are returned before any row is processed. Coercion
/// errors, and function errors when no fallback is configured, abort the
/// pass. On any error the table is left untouched.
pub fn register_row_transform(
    table: &mut Table,
    func: &RowFn,
    config: &RowTransformConfig,
) -> Result<()> {
    validate::registration(
        func.name(),
        func.params().iter().map(|p| p.name.as_str()),
        table,
        config.overwrite,
    )?;

    debug!(
        "row transform `{}` over {} rows (strict_mode={})",
        func.name(),
        table.len(),
        config.strict_mode
    );

    let column = apply(table, func, config)?;
    table.set_column(func.name(), column)
}

/// Computes the output column of `func` without mutating `table`.
///
/// Performs no validation; see [`register_row_transform`].
///
/// # Errors
///
/// Same as [`register_row_transform`], minus validation.
pub fn apply(table: &Table, func: &RowFn, config: &RowTransformConfig) -> Result<Column> {
    let fallback = config.exception_fallback.as_ref();
    let mut values: Vec<Value> = Vec::with_capacity(table.len());
    let mut substituted = 0usize;

    for row in table.rows() {
        let outcome = binder::invoke(func, row, config.strict_mode)?;
        if let (binder::RowOutcome::Failed(e), Some(_)) = (&outcome, fallback) {
            trace!("row {}: fallback for `{}` ({e})", row.position(), func.name());
            substituted += 1;
        }
        values.push(outcome.resolve(fallback)?);
    }

    debug!(
        "row transform `{}` done: {} rows, {} fallbacks",
        func.name(),
        values.len(),
        substituted
    );
    Ok(values.into_iter().collect())
}
