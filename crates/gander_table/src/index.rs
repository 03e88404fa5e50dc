//! Row labels.

use gander_foundation::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row identity labels, aligned with a table's rows.
///
/// Labels need not be unique: concatenating tables keeps each table's labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Index(im::Vector<Value>);

impl Index {
    /// Creates the default `0..len` integer index.
    #[must_use]
    pub fn range(len: usize) -> Self {
        Self((0..len).map(|i| Value::Int(i64::try_from(i).unwrap_or(i64::MAX))).collect())
    }

    /// Creates an index from explicit labels.
    #[must_use]
    pub fn from_labels<I, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the label at a row position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.0.get(position)
    }

    /// Returns an iterator over the labels.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// Returns the labels in `range`.
    #[must_use]
    pub fn slice(&self, range: std::ops::Range<usize>) -> Self {
        let start = range.start.min(self.len());
        let end = range.end.clamp(start, self.len());
        Self(self.0.clone().slice(start..end))
    }

    /// Returns a new index with `other`'s labels appended.
    #[must_use]
    pub fn concat(&self, other: &Index) -> Self {
        let mut new = self.0.clone();
        new.append(other.0.clone());
        Self(new)
    }
}
