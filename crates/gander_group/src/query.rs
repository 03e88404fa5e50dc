//! Selection queries.

use std::fmt;

use gander_foundation::{Error, ErrorKind, Result, Value};

/// Which registry entries a selection refers to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Query {
    /// Every entry, in insertion order.
    #[default]
    All,
    /// One entry, returned as stored.
    One(String),
    /// Several entries, in the listed order.
    Many(Vec<String>),
}

impl Query {
    /// Builds a query from a dynamic value.
    ///
    /// `Nil` selects everything, a string selects one key, and a list of
    /// strings selects several.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidQuery`] for any other shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Nil => Ok(Self::All),
            Value::String(s) => Ok(Self::One(s.to_string())),
            Value::List(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| invalid(value))
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Many),
            other => Err(invalid(other)),
        }
    }
}

fn invalid(value: &Value) -> Error {
    Error::new(ErrorKind::InvalidQuery(format!("{value:?}")))
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "*"),
            Self::One(key) => write!(f, "{key:?}"),
            Self::Many(keys) => write!(f, "{keys:?}"),
        }
    }
}

impl From<()> for Query {
    fn from((): ()) -> Self {
        Self::All
    }
}

impl From<&str> for Query {
    fn from(key: &str) -> Self {
        Self::One(key.to_string())
    }
}

impl From<String> for Query {
    fn from(key: String) -> Self {
        Self::One(key)
    }
}

impl From<Vec<&str>> for Query {
    fn from(keys: Vec<&str>) -> Self {
        Self::Many(keys.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Query {
    fn from(keys: Vec<String>) -> Self {
        Self::Many(keys)
    }
}

impl From<&[&str]> for Query {
    fn from(keys: &[&str]) -> Self {
        Self::Many(keys.iter().map(|k| (*k).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Query {
    fn from(keys: [&str; N]) -> Self {
        Self::Many(keys.iter().map(|k| (*k).to_string()).collect())
    }
}

impl<T: Into<Query>> From<Option<T>> for Query {
    fn from(query: Option<T>) -> Self {
        query.map_or(Self::All, Into::into)
    }
}
