//! Pre-execution checks shared by the row and column engines.

use std::collections::HashSet;

use gander_foundation::{Error, ErrorKind, Result};
use gander_table::Table;

/// Checks that no parameter name is declared twice.
///
/// # Errors
///
/// Returns [`ErrorKind::DuplicateParameter`] for the first repeat.
pub fn unique_params<'a, I>(function: &str, params: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in params {
        if !seen.insert(name) {
            return Err(Error::new(ErrorKind::DuplicateParameter {
                function: function.to_string(),
                parameter: name.to_string(),
            }));
        }
    }
    Ok(())
}

/// Checks that every parameter names a column of `table`.
///
/// # Errors
///
/// Returns [`ErrorKind::MissingColumns`] listing every missing name in
/// declared order, with the table's columns.
pub fn required_columns<'a, I>(function: &str, params: I, table: &Table) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let missing: Vec<String> = params
        .into_iter()
        .filter(|name| !table.contains_column(name))
        .map(str::to_string)
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(Error::missing_columns(
        function,
        missing,
        table.column_names().to_vec(),
    ))
}

/// Checks that `output` may be written to `table`.
///
/// # Errors
///
/// Returns [`ErrorKind::ColumnConflict`] when `overwrite` is off and the
/// column exists.
pub fn output_column(output: &str, table: &Table, overwrite: bool) -> Result<()> {
    if !overwrite && table.contains_column(output) {
        return Err(Error::column_conflict(output));
    }
    Ok(())
}

/// Runs every check in order: unique parameters, required columns, output column.
///
/// # Errors
///
/// Returns the first failing check's error.
pub fn registration<'a, I>(function: &str, params: I, table: &Table, overwrite: bool) -> Result<()>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    unique_params(function, params.clone())?;
    required_columns(function, params, table)?;
    output_column(function, table, overwrite)
}
