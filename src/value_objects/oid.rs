//! Oid value object for numeric object identifiers.
//!
//! Every schema definition except the DIT structure rule is keyed by an OID.
//! This module provides a validated wrapper around the dotted-decimal form.

use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated dotted-decimal object identifier.
///
/// ## Validation Rules
///
/// - At least two arcs separated by `.`
/// - Every arc is a non-empty run of ASCII digits
/// - No arc carries a leading zero unless it is exactly `0`
///
/// The default value is the empty, "zero" identifier used by definitions
/// that have not been assigned an identity yet.
///
/// ## Examples
///
/// ```rust
/// use dirschema::value_objects::Oid;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let oid = Oid::new("2.5.4.3")?;
///     assert_eq!(oid.arcs().count(), 4);
///
///     assert!(Oid::new("2.5.04").is_err());
///     assert!(Oid::new("cn").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid(String);

impl Oid {
    /// Create a new Oid with validation.
    pub fn new(value: impl Into<String>) -> SchemaResult<Self> {
        let value = value.into();
        if !Self::is_numeric_oid(&value) {
            return Err(SchemaError::InvalidOid { value });
        }
        Ok(Self(value))
    }

    /// Create an Oid without validation.
    ///
    /// Only used where the value was assembled from already validated arcs.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Whether the text is a syntactically valid numeric OID.
    pub fn is_numeric_oid(value: &str) -> bool {
        let mut arcs = 0;
        for arc in value.split('.') {
            if !Self::is_number(arc) {
                return false;
            }
            arcs += 1;
        }
        arcs >= 2
    }

    /// Whether the text is a run of dot-separated numeric arcs, as found in
    /// the suffix of a macro key. A single arc is accepted.
    pub(crate) fn is_arc_suffix(value: &str) -> bool {
        !value.is_empty() && value.split('.').all(Self::is_number)
    }

    fn is_number(arc: &str) -> bool {
        !arc.is_empty()
            && arc.bytes().all(|b| b.is_ascii_digit())
            && (arc == "0" || !arc.starts_with('0'))
    }

    /// Get the dotted string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the individual arcs.
    pub fn arcs(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|arc| !arc.is_empty())
    }

    /// Whether this is the unassigned zero identifier.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Append numeric arcs to produce a descendant identifier.
    pub fn child(&self, suffix: &str) -> SchemaResult<Self> {
        if !Self::is_arc_suffix(suffix) {
            return Err(SchemaError::InvalidOid {
                value: format!("{}.{}", self.0, suffix),
            });
        }
        Ok(Self::new_unchecked(format!("{}.{}", self.0, suffix)))
    }

    /// Whether `self` lies strictly beneath `other` in the OID tree.
    pub fn is_descendant_of(&self, other: &Oid) -> bool {
        !other.is_zero()
            && self.0.len() > other.0.len()
            && self.0.starts_with(&other.0)
            && self.0.as_bytes()[other.0.len()] == b'.'
    }
}

impl FromStr for Oid {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Oid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
