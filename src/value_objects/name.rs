//! Name value object for definition aliases.
//!
//! A definition may carry zero or more short descriptive names (`descr` in
//! the directory schema grammar). The first one is the primary display name.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Default upper bound on the length of a single name.
pub const DEFAULT_MAX_NAME_LEN: usize = 256;

/// An ordered, case-insensitively unique set of names.
///
/// ## Validation Rules
///
/// - A name begins with an ASCII letter
/// - Remaining characters are ASCII letters, digits or hyphens
/// - Names are unique within the set, compared case-insensitively
///
/// Equality is set equality: two Name values are equal when they hold the
/// same members regardless of order or case.
///
/// ## Examples
///
/// ```rust
/// use dirschema::value_objects::Name;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut name = Name::from_names(["cn", "commonName"])?;
///     assert_eq!(name.primary(), Some("cn"));
///     assert!(name.contains("COMMONNAME"));
///
///     // Duplicates are ignored
///     assert!(!name.push("CN")?);
///     assert_eq!(name.len(), 2);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(Vec<String>);

impl Name {
    /// Create an empty name set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a name set from an iterator of names, validating each.
    pub fn from_names<I, S>(names: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.push(name)?;
        }
        Ok(set)
    }

    /// Add a name. Returns `false` when an equal name is already present.
    pub fn push(&mut self, name: impl Into<String>) -> ValidationResult<bool> {
        let name = name.into();
        Self::validate_descr(&name, DEFAULT_MAX_NAME_LEN)?;
        if self.contains(&name) {
            return Ok(false);
        }
        self.0.push(name);
        Ok(true)
    }

    /// Remove a name, compared case-insensitively.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|n| !n.eq_ignore_ascii_case(name));
        before != self.0.len()
    }

    /// Whether the set holds the name, compared case-insensitively.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// The first, conventionally primary, name.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check every member against a length limit.
    pub fn validate(&self, max_len: usize) -> ValidationResult<()> {
        self.0
            .iter()
            .try_for_each(|name| Self::validate_descr(name, max_len))
    }

    /// Validate a single `descr` token.
    pub fn validate_descr(name: &str, max_len: usize) -> ValidationResult<()> {
        let mut chars = name.chars();
        match chars.next() {
            None => return Err(ValidationError::invalid_name(name, "name cannot be empty")),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(ValidationError::invalid_name(
                    name,
                    "name must begin with a letter",
                ));
            }
            _ => {}
        }

        if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '-')) {
            return Err(ValidationError::invalid_name(
                name,
                "name may only contain letters, digits and hyphens",
            ));
        }

        if name.len() > max_len {
            return Err(ValidationError::invalid_name(
                name,
                format!("name exceeds {} characters", max_len),
            ));
        }

        Ok(())
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|n| other.contains(n))
    }
}

impl Eq for Name {}
