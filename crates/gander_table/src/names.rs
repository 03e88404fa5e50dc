//! Column name normalization.
//!
//! Turns arbitrary labels into identifier-like names: `"  0123 aBc "`
//! becomes `"_0123_abc"`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use gander_foundation::Result;
use regex::Regex;

use crate::table::Table;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static NON_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]").expect("identifier pattern is valid"));
static LEADING_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]").expect("leading digit pattern is valid"));

/// Normalizes one column label.
///
/// Trims, turns each whitespace run into `_`, drops characters outside
/// `[0-9A-Za-z_]`, prefixes `_` to a leading digit, and lowercases.
#[must_use]
pub fn normalize_column_name(label: &str) -> String {
    let s = WHITESPACE.replace_all(label.trim(), "_");
    let s = NON_IDENTIFIER.replace_all(&s, "");
    let s = LEADING_DIGIT.replace(&s, "_$0");
    s.to_lowercase()
}

/// Makes names unique by suffixing repeats with `_1`, `_2`, ... in first-seen order.
///
/// A suffixed name that collides with a name already emitted keeps counting
/// up until it is unique.
#[must_use]
pub fn dedupe_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut used: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for name in names {
        let name = name.into();
        let count = counts.entry(name.clone()).or_insert(0);
        let mut candidate = if *count == 0 {
            name.clone()
        } else {
            format!("{name}_{count}")
        };
        while used.contains(&candidate) {
            *count += 1;
            candidate = format!("{name}_{count}");
        }
        *count += 1;
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

impl Table {
    /// Normalizes every column name in place, deduplicating the results.
    ///
    /// # Errors
    ///
    /// Propagates [`Table::rename_columns`] errors; deduplicated names never
    /// trigger one in practice.
    pub fn normalize_column_names(&mut self) -> Result<()> {
        let names = dedupe_names(self.column_names().iter().map(|n| normalize_column_name(n)));
        self.rename_columns(names)
    }
}
