//! Alias registry mapping OID macros to numeric identifiers.
//!
//! Schema files commonly abbreviate long OID prefixes with a macro, writing
//! `nisSchema.1.1` for `1.3.6.1.1.1.1.1`. The scanner consults a [`Macros`]
//! registry whenever a leading identifier is not already a numeric OID.

use crate::error::{SchemaError, SchemaResult, ValidationError};
use crate::value_objects::Oid;
use indexmap::IndexMap;
use log::debug;
use parking_lot::Mutex;

/// Case-insensitive alias to OID table.
///
/// ## Examples
///
/// ```rust
/// use dirschema::manifest::Macros;
/// use dirschema::value_objects::Oid;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let macros = Macros::new();
///     macros.set("nisSchema", Oid::new("1.3.6.1.1.1")?)?;
///
///     assert_eq!(macros.resolve("nisSchema")?.as_str(), "1.3.6.1.1.1");
///     assert_eq!(macros.resolve("nisSchema.1.1")?.as_str(), "1.3.6.1.1.1.1.1");
///     assert_eq!(macros.resolve("NISSCHEMA:0")?.as_str(), "1.3.6.1.1.1.0");
///     assert!(macros.resolve("unknownSchema").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct Macros {
    aliases: Mutex<IndexMap<String, Oid>>,
}

impl Macros {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias. Returns `false` if the alias was already taken, in
    /// which case the existing mapping is kept.
    pub fn set(&self, alias: &str, oid: Oid) -> SchemaResult<bool> {
        Self::validate_alias(alias)?;
        if oid.is_zero() {
            return Err(SchemaError::InvalidOid {
                value: String::new(),
            });
        }

        let mut aliases = self.aliases.lock();
        let key = alias.to_ascii_lowercase();
        if aliases.contains_key(&key) {
            return Ok(false);
        }
        debug!("Registered OID macro {} -> {}", alias, oid);
        aliases.insert(key, oid);
        Ok(true)
    }

    /// The OID registered for an alias.
    pub fn get(&self, alias: &str) -> Option<Oid> {
        self.aliases
            .lock()
            .get(&alias.to_ascii_lowercase())
            .cloned()
    }

    /// Resolve a key to a numeric OID.
    ///
    /// Numeric OIDs are returned as-is. Otherwise the key is split at the
    /// first `:` or `.`; the leading part must be a registered alias and the
    /// remainder, if any, is appended as further arcs.
    pub fn resolve(&self, key: &str) -> SchemaResult<Oid> {
        if Oid::is_numeric_oid(key) {
            return Oid::new(key);
        }

        let (alias, suffix) = match key.find([':', '.']) {
            Some(at) => (&key[..at], Some(&key[at + 1..])),
            None => (key, None),
        };

        let base = self.get(alias).ok_or_else(|| SchemaError::UnresolvedAlias {
            alias: alias.to_string(),
        })?;

        match suffix {
            Some(suffix) => base.child(suffix),
            None => Ok(base),
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.lock().is_empty()
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.aliases
            .lock()
            .contains_key(&alias.to_ascii_lowercase())
    }

    /// Aliases start with a letter and continue with letters, digits or hyphens.
    fn validate_alias(alias: &str) -> SchemaResult<()> {
        let mut chars = alias.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(ValidationError::invalid_name(alias, "invalid OID macro alias").into());
        }
        Ok(())
    }
}
