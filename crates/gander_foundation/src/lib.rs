//! Core values, declared types, and errors for Gander.
//!
//! This crate provides:
//! - [`Value`] - The dynamic cell value stored in every table column
//! - [`Type`] - Declared parameter types and the conversions they perform
//! - [`Converter`] - Named user-supplied conversions for custom declared types
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use types::{Converter, Type};
pub use value::Value;

/// Result type alias using the Gander error type.
pub type Result<T> = std::result::Result<T, Error>;
