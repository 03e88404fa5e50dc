//! Row-wise and column-wise transforms for Gander tables.
//!
//! This crate provides:
//! - [`RowFn`] / [`ColumnFn`] - Transform declarations with ordered parameters
//! - [`Param`] - Declared parameter name, type, and default
//! - [`coerce`] - The per-value coercion policy and [`StrictMode`]
//! - [`register_row_transform`] - Per-row evaluation with failure containment
//! - [`register_column_transform`] - Single-call evaluation over whole columns
//!
//! # Example
//!
//! ```
//! use gander_foundation::{Type, Value};
//! use gander_table::Table;
//! use gander_transform::{Param, RowFn, RowTransformConfig, register_row_transform};
//!
//! let mut table = Table::from_columns([
//!     ("a", vec![Value::Int(0), Value::Int(5)]),
//!     ("b", vec![Value::Nil, Value::Int(9)]),
//! ])?;
//!
//! let r = RowFn::new(
//!     "r",
//!     [Param::new("a").typed(Type::Int), Param::new("b").typed(Type::Int).with_default(9)],
//!     |args| Ok(Value::Int(args.int("a")? + args.int("b")?)),
//! );
//! register_row_transform(&mut table, &r, &RowTransformConfig::default())?;
//!
//! assert_eq!(table.column("r").unwrap().to_vec(), vec![Value::Int(9), Value::Int(14)]);
//! # Ok::<(), gander_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binder;
pub mod coerce;
pub mod column;
pub mod config;
pub mod function;
pub mod param;
pub mod row;
pub mod validate;

pub use binder::{RowOutcome, bind_and_invoke};
pub use coerce::{StrictMode, coerce};
pub use column::register_column_transform;
pub use config::{ColumnTransformConfig, RowTransformConfig};
pub use function::{ColumnArgs, ColumnFn, ColumnOutput, RowFn};
pub use param::{Args, Param};
pub use row::register_row_transform;
