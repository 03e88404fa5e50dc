//! Integration tests for Layer 1: Table
//!
//! Tests for Table, Column, Row views, and column name normalization.

mod names;
mod tables;
