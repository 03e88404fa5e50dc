//! Row binding: turn one table row into an argument list and invoke a [`RowFn`].

use gander_foundation::{Error, ErrorContext, Result, Value};
use gander_table::Row;

use crate::coerce::{StrictMode, coerce};
use crate::function::RowFn;
use crate::param::Args;

/// Result of calling a row function on one row.
#[derive(Debug)]
pub enum RowOutcome {
    /// The function returned a value.
    Computed(Value),
    /// The function failed.
    Failed(Error),
}

impl RowOutcome {
    /// Returns true if the function failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Resolves to a value, substituting `fallback` for a failure when one is set.
    ///
    /// # Errors
    ///
    /// Returns the function's error when it failed and no fallback is set.
    pub fn resolve(self, fallback: Option<&Value>) -> Result<Value> {
        match (self, fallback) {
            (Self::Computed(value), _) => Ok(value),
            (Self::Failed(_), Some(fallback)) => Ok(fallback.clone()),
            (Self::Failed(e), None) => Err(e),
        }
    }
}

/// Builds the argument list for `row` in declared parameter order.
///
/// Row fields that no parameter names are ignored.
///
/// # Errors
///
/// Returns a coercion error from [`coerce`], or a function error when the row
/// lacks a declared parameter.
pub fn bind<'f>(func: &'f RowFn, row: Row<'_>, mode: StrictMode) -> Result<Args<'f>> {
    let mut values = Vec::with_capacity(func.params().len());
    for param in func.params() {
        let raw = row.get(&param.name).ok_or_else(|| {
            Error::function_failed(
                func.name(),
                format!("missing required argument `{}`", param.name),
            )
        })?;
        values.push(coerce(param, raw, mode, func.name())?);
    }
    Ok(Args::new(func.params(), values))
}

/// Binds and invokes `func` on `row`, reporting function failures as an outcome.
///
/// Coercion errors are returned as `Err` so that no fallback can mask them.
///
/// # Errors
///
/// Returns a coercion error raised while binding.
pub fn invoke(func: &RowFn, row: Row<'_>, mode: StrictMode) -> Result<RowOutcome> {
    let args = match bind(func, row, mode) {
        Ok(args) => args,
        Err(e) if e.is_coercion() => return Err(with_row(e, func, row)),
        Err(e) => return Ok(RowOutcome::Failed(with_row(e, func, row))),
    };
    Ok(match func.call(&args) {
        Ok(value) => RowOutcome::Computed(value),
        Err(e) => RowOutcome::Failed(with_row(e, func, row)),
    })
}

/// Binds `row` to `func`, invokes it, and applies the fallback.
///
/// # Errors
///
/// Returns coercion errors, and function errors when no fallback is set.
pub fn bind_and_invoke(
    func: &RowFn,
    row: Row<'_>,
    mode: StrictMode,
    fallback: Option<&Value>,
) -> Result<Value> {
    invoke(func, row, mode)?.resolve(fallback)
}

fn with_row(err: Error, func: &RowFn, row: Row<'_>) -> Error {
    if err.context.is_some() {
        return err;
    }
    err.with_context(
        ErrorContext::new()
            .with_function(func.name())
            .with_row(row.position()),
    )
}
