//! Error types for the Gander system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;
use crate::value::Value;

/// The main error type for Gander operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a transform function that failed.
    ///
    /// Transform closures use this to signal a per-row failure.
    #[must_use]
    pub fn function_failed(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Function {
            function: function.into(),
            message: message.into(),
        })
    }

    /// Creates a missing columns error.
    #[must_use]
    pub fn missing_columns(
        function: impl Into<String>,
        missing: Vec<String>,
        available: Vec<String>,
    ) -> Self {
        Self::new(ErrorKind::MissingColumns {
            function: function.into(),
            missing,
            available,
        })
    }

    /// Creates a column conflict error.
    #[must_use]
    pub fn column_conflict(column: impl Into<String>) -> Self {
        Self::new(ErrorKind::ColumnConflict {
            column: column.into(),
        })
    }

    /// Creates a column not found error.
    #[must_use]
    pub fn column_not_found(columns: Vec<String>) -> Self {
        Self::new(ErrorKind::ColumnNotFound(columns))
    }

    /// Creates a key not found error.
    #[must_use]
    pub fn key_not_found(keys: Vec<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound(keys))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(column: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::LengthMismatch {
            column: column.into(),
            expected,
            actual,
        })
    }

    /// Returns true if this error is a pre-execution validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingColumns { .. }
                | ErrorKind::ColumnConflict { .. }
                | ErrorKind::DuplicateParameter { .. }
        )
    }

    /// Returns true if this error came from resolving a parameter value.
    #[must_use]
    pub const fn is_coercion(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Configuration { .. } | ErrorKind::TypeCoercion { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Transform parameters that are not columns of the target table.
    #[error(
        "parameter(s) {missing:?} of `{function}` are not column names in the table; the columns are {available:?}"
    )]
    MissingColumns {
        /// The transform function name.
        function: String,
        /// Offending parameter names, in declared order.
        missing: Vec<String>,
        /// The table's columns at validation time.
        available: Vec<String>,
    },

    /// Output column already exists and overwriting is disabled.
    #[error("column `{column}` already exists and overwrite is disabled")]
    ColumnConflict {
        /// The conflicting column name.
        column: String,
    },

    /// A value failed to convert, strict mode is `default`, and the parameter has no default.
    #[error(
        "strict mode is `default` but parameter `{parameter}` of `{function}` has no default; the value {value:?} could not be converted to `{ty}`: {cause}"
    )]
    Configuration {
        /// The transform function name.
        function: String,
        /// The parameter name.
        parameter: String,
        /// The raw value that failed to convert.
        value: Value,
        /// The declared type.
        ty: Type,
        /// The underlying conversion error.
        #[source]
        cause: Box<Error>,
    },

    /// A value failed to convert under strict mode.
    #[error(
        "parameter `{parameter}` is declared as `{ty}` but the value {value:?} could not be converted: {cause}"
    )]
    TypeCoercion {
        /// The parameter name.
        parameter: String,
        /// The declared type.
        ty: Type,
        /// The raw value that failed to convert.
        value: Value,
        /// The underlying conversion error.
        #[source]
        cause: Box<Error>,
    },

    /// Type mismatch during a column operation.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// A raw conversion failure.
    #[error("cannot convert {value:?} to `{ty}`: {reason}")]
    Cast {
        /// The target type.
        ty: Type,
        /// The value that was converted.
        value: Value,
        /// Why the conversion failed.
        reason: String,
    },

    /// A transform declares the same parameter twice.
    #[error("parameter `{parameter}` is declared more than once by `{function}`")]
    DuplicateParameter {
        /// The transform function name.
        function: String,
        /// The repeated parameter name.
        parameter: String,
    },

    /// An option string that is not one of the accepted spellings.
    #[error("invalid option {value:?}; expected one of {expected}")]
    InvalidOption {
        /// The rejected input.
        value: String,
        /// The accepted spellings.
        expected: String,
    },

    /// A transform function reported a failure.
    #[error("`{function}` failed: {message}")]
    Function {
        /// The transform function name.
        function: String,
        /// Description of the failure.
        message: String,
    },

    /// Registry keys that were queried but not registered.
    #[error("key(s) not found: {0:?}")]
    KeyNotFound(Vec<String>),

    /// A query with an unsupported shape.
    #[error("invalid query: {0}; expected nil, a name, or a list of names")]
    InvalidQuery(String),

    /// Columns that were selected but do not exist.
    #[error("column(s) not found: {0:?}")]
    ColumnNotFound(Vec<String>),

    /// A table was built with the same column name twice.
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// A column does not match the table's row count.
    #[error("column `{column}` has length {actual}, expected {expected}")]
    LengthMismatch {
        /// The column name.
        column: String,
        /// The table's row count.
        expected: usize,
        /// The column's length.
        actual: usize,
    },

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The transform function that was running.
    pub function: Option<String>,
    /// Row position being processed.
    pub row: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the function name.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Sets the row position.
    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.function, self.row) {
            (Some(function), Some(row)) => write!(f, "in {function} at row {row}"),
            (Some(function), None) => write!(f, "in {function}"),
            (None, Some(row)) => write!(f, "at row {row}"),
            (None, None) => Ok(()),
        }
    }
}
