//! Integration tests for Layer 2: Group
//!
//! Tests for query resolution and Grouper selection over split tables.

mod queries;
