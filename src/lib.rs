//! Gander - Declarative table transforms with typed parameter binding
//!
//! This crate re-exports all layers of the Gander system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: gander_transform  - Coercion policy, row binder, row/column engines
//!          gander_group      - Column groups, table groups, query selection
//! Layer 1: gander_table      - Table, Column, Index, Row, name normalization
//! Layer 0: gander_foundation - Core types (Value, Type, Error)
//! ```

pub use gander_foundation as foundation;
pub use gander_group as group;
pub use gander_table as table;
pub use gander_transform as transform;
