//! Identifier and value types shared by every definition kind.
//!
//! Each type validates its contents at construction time so that definitions
//! assembled from them only ever hold well-formed identifiers, names and
//! extension labels.
//!
//! - [`Oid`] - dotted-decimal object identifier
//! - [`RuleId`] - DIT structure rule number
//! - [`Name`] - case-insensitive ordered alias set
//! - [`Description`] - free text, excluded from equality
//! - [`Extensions`] - ordered `X-` label map
//! - [`Flags`] - boolean markers

pub mod description;
pub mod extensions;
pub mod flags;
pub mod name;
pub mod oid;
pub mod rule_id;

pub use description::{Description, escape_qdstring, unescape_qdstring};
pub use extensions::Extensions;
pub use flags::Flags;
pub use name::Name;
pub use oid::Oid;
pub use rule_id::RuleId;
