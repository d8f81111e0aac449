//! Unit tests for schema components
//!
//! These tests drive one component at a time through the public API.
//!
//! ## Organization
//!
//! - [`value_objects`] - Tests for identifier and value types
//! - [`scanner`] - Tests for the textual scanner
//! - [`serializer`] - Tests for canonical rendering
//! - [`manifest`] - Tests for registries and macros

pub mod manifest;
pub mod scanner;
pub mod value_objects;
