//! Insertion-ordered registries and query resolution.

use gander_foundation::{Error, Result};

use crate::query::Query;

// =============================================================================
// Registry
// =============================================================================

/// Named entries kept in insertion order.
///
/// Re-inserting a name replaces its value but keeps its original position.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Gets an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<N: Into<String>, T> FromIterator<(N, T)> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, value) in iter {
            registry.insert(name, value);
        }
        registry
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves `query` against `registry`.
///
/// A single key returns its value as stored. `All` and key lists pass the
/// selected values, in order, to `combine`.
///
/// # Errors
///
/// Returns a key-not-found error naming the single missing key, or every
/// missing key of a list.
pub fn resolve<T, F>(registry: &Registry<T>, query: &Query, combine: F) -> Result<T>
where
    T: Clone,
    F: FnOnce(Vec<&T>) -> T,
{
    match query {
        Query::All => Ok(combine(registry.values().collect())),
        Query::One(key) => registry
            .get(key)
            .cloned()
            .ok_or_else(|| Error::key_not_found(vec![key.clone()])),
        Query::Many(keys) => {
            let missing: Vec<String> = keys
                .iter()
                .filter(|k| !registry.contains(k))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(Error::key_not_found(missing));
            }
            Ok(combine(keys.iter().filter_map(|k| registry.get(k)).collect()))
        }
    }
}
