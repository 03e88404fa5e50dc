//! Configuration for transform registration.

use gander_foundation::Value;

use crate::coerce::StrictMode;

/// Configuration for row-wise transforms.
///
/// Controls failure containment, column replacement, and coercion strictness.
#[derive(Clone, Debug, PartialEq)]
pub struct RowTransformConfig {
    /// Value substituted for a row whose function call fails (`None` = propagate).
    pub exception_fallback: Option<Value>,

    /// Whether an existing output column may be replaced.
    pub overwrite: bool,

    /// How failed parameter conversions are handled.
    pub strict_mode: StrictMode,
}

impl Default for RowTransformConfig {
    fn default() -> Self {
        Self {
            exception_fallback: None,
            overwrite: true,
            strict_mode: StrictMode::Default,
        }
    }
}

impl RowTransformConfig {
    /// Creates a configuration that fails on any unconvertible value.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_mode: StrictMode::Strict,
            ..Self::default()
        }
    }

    /// Creates a configuration that passes unconvertible values through and
    /// fills failed rows with `Nil`.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            exception_fallback: Some(Value::Nil),
            overwrite: true,
            strict_mode: StrictMode::Lenient,
        }
    }

    /// Builder method to set the failure fallback.
    #[must_use]
    pub fn with_exception_fallback(mut self, fallback: impl Into<Value>) -> Self {
        self.exception_fallback = Some(fallback.into());
        self
    }

    /// Builder method to clear the failure fallback.
    #[must_use]
    pub fn without_exception_fallback(mut self) -> Self {
        self.exception_fallback = None;
        self
    }

    /// Builder method to allow or forbid replacing an existing column.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Builder method to set the coercion mode.
    #[must_use]
    pub fn with_strict_mode(mut self, mode: impl Into<StrictMode>) -> Self {
        self.strict_mode = mode.into();
        self
    }
}

/// Configuration for column-wise transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnTransformConfig {
    /// Whether an existing output column may be replaced.
    pub overwrite: bool,
}

impl Default for ColumnTransformConfig {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

impl ColumnTransformConfig {
    /// Builder method to allow or forbid replacing an existing column.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
