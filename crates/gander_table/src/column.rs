//! Column storage.
//!
//! A [`Column`] is a persistent vector of values. Cloning is O(1), which lets
//! column-wise transforms receive whole columns without copying cells.

use std::iter::FromIterator;

use gander_foundation::{Error, Result, Type, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of cell values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column(im::Vector<Value>);

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Creates a column holding `len` copies of `value`.
    #[must_use]
    pub fn filled(value: &Value, len: usize) -> Self {
        Self(std::iter::repeat_n(value.clone(), len).collect())
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// Returns the underlying persistent vector.
    #[must_use]
    pub fn values(&self) -> &im::Vector<Value> {
        &self.0
    }

    /// Copies the values into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.iter().cloned().collect()
    }

    /// Returns a new column with `value` appended.
    #[must_use]
    pub fn push_back(&self, value: Value) -> Self {
        let mut new = self.0.clone();
        new.push_back(value);
        Self(new)
    }

    /// Returns the values in `range` as a new column.
    #[must_use]
    pub fn slice(&self, range: std::ops::Range<usize>) -> Self {
        let start = range.start.min(self.len());
        let end = range.end.clamp(start, self.len());
        Self(self.0.clone().slice(start..end))
    }

    /// Returns a new column with `other` appended.
    #[must_use]
    pub fn concat(&self, other: &Column) -> Self {
        let mut new = self.0.clone();
        new.append(other.0.clone());
        Self(new)
    }

    /// Applies `f` to every value.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Value) -> Value,
    {
        Self(self.0.iter().map(f).collect())
    }

    /// Combines two columns value by value.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns differ in length or `f` fails.
    pub fn zip_with<F>(&self, other: &Column, mut f: F) -> Result<Self>
    where
        F: FnMut(&Value, &Value) -> Result<Value>,
    {
        if self.len() != other.len() {
            return Err(Error::length_mismatch("<zip>", self.len(), other.len()));
        }
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<im::Vector<_>>>()
            .map(Self)
    }

    /// Returns the number of non-absent values.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|v| !v.is_absent()).count()
    }

    /// Iterates the non-absent values as numbers.
    fn numbers(&self) -> impl Iterator<Item = Result<f64>> + '_ {
        self.0.iter().filter(|v| !v.is_absent()).map(|v| {
            v.as_number()
                .ok_or_else(|| Error::type_mismatch(Type::Float, v.value_type()))
        })
    }

    /// Sums the non-absent values.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if a non-absent value is not numeric.
    pub fn sum(&self) -> Result<f64> {
        self.numbers().sum()
    }

    /// Mean of the non-absent values; NaN when there are none.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if a non-absent value is not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Result<f64> {
        let values = self.numbers().collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            return Ok(f64::NAN);
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Sample standard deviation of the non-absent values.
    ///
    /// NaN when fewer than two values are present.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if a non-absent value is not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn std(&self) -> Result<f64> {
        let values = self.numbers().collect::<Result<Vec<_>>>()?;
        if values.len() < 2 {
            return Ok(f64::NAN);
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let squares: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
        Ok((squares / (n - 1.0)).sqrt())
    }
}

impl FromIterator<Value> for Column {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Column {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Into::into).collect()
    }
}

impl From<im::Vector<Value>> for Column {
    fn from(values: im::Vector<Value>) -> Self {
        Self(values)
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
