//! Canonical serializer ("unmarshal") for schema definitions.
//!
//! Any definition can be turned back into its textual form at any time,
//! independently of the text it was scanned from. Rendering follows a fixed
//! field order per kind so that output is deterministic, and scanning the
//! output again yields a definition equal to the original.
//!
//! # Formatting strategies
//!
//! A [`Formatter`] overrides the default single-line rendering. It can be
//! attached to an individual definition with [`Unmarshal::set_formatter`] or
//! to a whole registry with
//! [`Manifest::set_formatter`](crate::manifest::Manifest::set_formatter).
//!
//! ```rust
//! use dirschema::definitions::{LdapSyntax, Definition};
//! use dirschema::serializer::{Formatter, Unmarshal};
//! use dirschema::value_objects::{Description, Oid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut syntax = LdapSyntax::new(
//!     Oid::new("1.3.6.1.4.1.1466.115.121.1.15")?,
//!     Description::new("Directory String")?,
//! );
//! assert_eq!(
//!     syntax.unmarshal()?,
//!     "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )"
//! );
//!
//! syntax.set_formatter(Some(Formatter::new(|s: &LdapSyntax| Ok(s.key()))));
//! assert_eq!(syntax.unmarshal()?, "1.3.6.1.4.1.1466.115.121.1.15");
//! # Ok(())
//! # }
//! ```

mod canonical;

pub use canonical::Layout;

use crate::definitions::Definition;
use crate::error::{SchemaError, SchemaResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Flattened field table produced by [`Unmarshal::map`].
pub type DefinitionMap = HashMap<String, Vec<String>>;

/// Injectable rendering strategy for one definition kind.
pub struct Formatter<T>(Arc<dyn Fn(&T) -> SchemaResult<String> + Send + Sync>);

impl<T> Formatter<T> {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&T) -> SchemaResult<String> + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    /// Render a definition with this strategy.
    pub fn format(&self, definition: &T) -> SchemaResult<String> {
        (self.0)(definition)
    }
}

impl<T: Unmarshal> Formatter<T> {
    /// The canonical form broken over several lines, one field per line.
    /// Scanning the result yields the same definition as the single-line form.
    pub fn multi_line() -> Self {
        Self::new(|definition: &T| {
            ensure_populated(definition)?;
            Ok(definition.render(Layout::MultiLine))
        })
    }
}

impl<T> Clone for Formatter<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Formatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

/// Rendering of definitions back into text.
pub trait Unmarshal: Definition {
    /// The formatter attached to this definition, if any.
    fn formatter(&self) -> Option<&Formatter<Self>>;

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>);

    /// Render every field in the fixed order for this kind.
    fn render(&self, layout: Layout) -> String;

    /// Flatten into a field name to value list table. Carries no ordering
    /// guarantees; references are given by their key.
    fn map(&self) -> DefinitionMap;

    /// The default single-line canonical form, ignoring any formatter.
    fn canonical(&self) -> SchemaResult<String> {
        ensure_populated(self)?;
        Ok(self.render(Layout::SingleLine))
    }

    /// Render with the attached formatter, or canonically when none is set.
    fn unmarshal(&self) -> SchemaResult<String> {
        match self.formatter() {
            Some(formatter) => {
                ensure_populated(self)?;
                formatter.format(self)
            }
            None => self.canonical(),
        }
    }

    /// The flattened table as a JSON object.
    fn to_json(&self) -> SchemaResult<serde_json::Value> {
        Ok(serde_json::to_value(self.map())?)
    }
}

fn ensure_populated<T: Definition>(definition: &T) -> SchemaResult<()> {
    if definition.is_zero() {
        return Err(SchemaError::ZeroInstance { kind: T::KIND });
    }
    Ok(())
}

/// Free-function form of [`Unmarshal::unmarshal`].
pub fn unmarshal<T: Unmarshal>(definition: &T) -> SchemaResult<String> {
    definition.unmarshal()
}
