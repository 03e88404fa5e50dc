//! Column groups, table groups, and query-driven selection for Gander.
//!
//! This crate provides:
//! - [`Query`] - All entries, one key, or an ordered list of keys
//! - [`Registry`] - An insertion-ordered name to value map
//! - [`resolve`] - Query resolution with a combine step
//! - [`Grouper`] - Named column groups over named tables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grouper;
pub mod query;
pub mod registry;

pub use grouper::{Grouper, union_sorted};
pub use query::Query;
pub use registry::{Registry, resolve};
