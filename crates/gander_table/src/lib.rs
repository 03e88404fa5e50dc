//! Ordered named-column tables for Gander.
//!
//! This crate provides:
//! - [`Table`] - Named, ordered columns aligned to a row [`Index`]
//! - [`Column`] - Persistent column storage with vectorized helpers
//! - [`Row`] - Borrowed views of a single row
//! - Column name normalization ([`normalize_column_name`], [`dedupe_names`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod column;
pub mod index;
pub mod names;
pub mod row;
pub mod table;

pub use column::Column;
pub use index::Index;
pub use names::{dedupe_names, normalize_column_name};
pub use row::Row;
pub use table::Table;
