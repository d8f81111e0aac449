//! Directory schema definitions for Rust.
//!
//! Scans the textual definitions a directory publishes in its subschema
//! (attribute types, object classes, matching rules and the rest) into a
//! typed, cross-referenced object graph, validates them, and renders them
//! back to text that round-trips exactly.
//!
//! # Core Components
//!
//! - [`Schema`] - Bundle of per-kind registries and the OID macro registry
//! - [`Manifest`] - Registry of canonical definitions of one kind
//! - [`Marshal`] / [`Unmarshal`] - Text to definition and back
//! - [`Validate`] - Per-kind structural rules
//!
//! # Quick Start
//!
//! ```rust
//! use dirschema::definitions::AttributeType;
//! use dirschema::{SchemaBuilder, Unmarshal};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::new()
//!     .with_macro("exampleAttrs", "1.3.6.1.4.1.56521.1")
//!     .with_defaults()
//!     .build()?;
//!
//! let at = schema.marshal_and_set::<AttributeType>(
//!     "( exampleAttrs.1 NAME 'nickname' DESC 'Preferred name' SUP name )",
//! )?;
//! assert_eq!(
//!     at.read().unmarshal()?,
//!     "( 1.3.6.1.4.1.56521.1.1 NAME 'nickname' DESC 'Preferred name' SUP name )"
//! );
//! # Ok(())
//! # }
//! ```

pub mod definitions;
pub mod error;
pub mod manifest;
pub mod scanner;
pub mod schema;
pub mod serializer;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use definitions::{Definition, DefinitionKind, Shared};
pub use error::{SchemaError, SchemaResult, ValidationError, ValidationResult};
pub use manifest::{Macros, Manifest};
pub use scanner::{Marshal, ScanContext, marshal};
pub use schema::{Registered, Schema, SchemaBuilder, SchemaConfig};
pub use serializer::{Formatter, Layout, Unmarshal, unmarshal};
pub use validation::Validate;
pub use value_objects::{Oid, RuleId};
