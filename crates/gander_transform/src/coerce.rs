//! Parameter coercion policy.
//!
//! Resolves one raw cell value against a declared [`Param`]:
//!
//! 1. An absent value (`Nil` or NaN) resolves to the default, or stays absent.
//! 2. An untyped parameter passes the value through.
//! 3. A typed parameter converts the value with its declared type.
//! 4. A failed conversion is handled according to [`StrictMode`].

use std::fmt;
use std::str::FromStr;

use gander_foundation::{Error, ErrorKind, Result, Value};
use log::{trace, warn};

use crate::param::Param;

/// How a failed conversion is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrictMode {
    /// Fail the whole transform with a coercion error.
    Strict,
    /// Pass the raw value through unchanged.
    Lenient,
    /// Substitute the default if one exists, else fail with a configuration error.
    #[default]
    Default,
}

impl From<bool> for StrictMode {
    fn from(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

impl FromStr for StrictMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "strict" => Ok(Self::Strict),
            "false" | "lenient" => Ok(Self::Lenient),
            "default" => Ok(Self::Default),
            _ => Err(Error::new(ErrorKind::InvalidOption {
                value: s.to_string(),
                expected: "true, false, default".to_string(),
            })),
        }
    }
}

impl fmt::Display for StrictMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "true"),
            Self::Lenient => write!(f, "false"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Resolves a raw value for `param` of the transform named `function`.
///
/// # Errors
///
/// In [`StrictMode::Strict`], a failed conversion returns
/// [`ErrorKind::TypeCoercion`]. In [`StrictMode::Default`], a failed
/// conversion without a default returns [`ErrorKind::Configuration`].
pub fn coerce(param: &Param, raw: &Value, mode: StrictMode, function: &str) -> Result<Value> {
    if raw.is_absent() {
        return Ok(param.default.clone().unwrap_or_else(|| raw.clone()));
    }

    let Some(ty) = &param.ty else {
        return Ok(raw.clone());
    };

    let cause = match ty.cast(raw) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    match mode {
        StrictMode::Strict => Err(Error::new(ErrorKind::TypeCoercion {
            parameter: param.name.clone(),
            ty: ty.clone(),
            value: raw.clone(),
            cause: Box::new(cause),
        })),
        StrictMode::Lenient => {
            trace!(
                "{function}: passing {raw:?} through for `{}` ({cause})",
                param.name
            );
            Ok(raw.clone())
        }
        StrictMode::Default => match &param.default {
            Some(default) => {
                warn!(
                    "{function}: could not convert {raw:?} to {ty} for `{}`; using default {default:?}",
                    param.name
                );
                Ok(default.clone())
            }
            None => Err(Error::new(ErrorKind::Configuration {
                function: function.to_string(),
                parameter: param.name.clone(),
                value: raw.clone(),
                ty: ty.clone(),
                cause: Box::new(cause),
            })),
        },
    }
}
