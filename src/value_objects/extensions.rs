//! Extensions value object for `X-` prefixed definition labels.
//!
//! Extensions are kept in insertion order so the canonical serializer emits
//! them deterministically, in the same order they were scanned or added.

use crate::error::{ValidationError, ValidationResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered map from `X-` label to an ordered value list.
///
/// ## Examples
///
/// ```rust
/// use dirschema::value_objects::Extensions;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut ext = Extensions::new();
///     ext.set("X-ORIGIN", ["RFC4519"])?;
///     ext.push("X-ORIGIN", "user defined")?;
///     assert_eq!(ext.get("X-ORIGIN").map(|v| v.len()), Some(2));
///     assert!(ext.set("ORIGIN", ["nope"]).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions(IndexMap<String, Vec<String>>);

impl Extensions {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Replace the values under `label`, keeping its original position if
    /// it was already present.
    pub fn set<I, S>(&mut self, label: &str, values: I) -> ValidationResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::validate_label(label)?;
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        for value in &values {
            Self::validate_value(label, value)?;
        }
        self.0.insert(label.to_string(), values);
        Ok(())
    }

    /// Append one value under `label`, creating the entry if needed.
    pub fn push(&mut self, label: &str, value: impl Into<String>) -> ValidationResult<()> {
        Self::validate_label(label)?;
        let value = value.into();
        Self::validate_value(label, &value)?;
        self.0.entry(label.to_string()).or_default().push(value);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.0.get(label).map(Vec::as_slice)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    /// Remove an entry, preserving the order of the remaining ones.
    pub fn remove(&mut self, label: &str) -> Option<Vec<String>> {
        self.0.shift_remove(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Check every label and value.
    pub fn validate(&self) -> ValidationResult<()> {
        self.0.iter().try_for_each(|(label, values)| {
            Self::validate_label(label)?;
            values
                .iter()
                .try_for_each(|value| Self::validate_value(label, value))
        })
    }

    /// A label is `X-` followed by uppercase letters, digits, `-` or `_`.
    pub fn validate_label(label: &str) -> ValidationResult<()> {
        let valid = label
            .strip_prefix("X-")
            .filter(|rest| !rest.is_empty())
            .is_some_and(|rest| {
                rest.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_')
            });

        if !valid {
            return Err(ValidationError::InvalidExtensionLabel {
                label: label.to_string(),
            });
        }
        Ok(())
    }

    /// Values are free text without control characters, which the scanner
    /// would fold into spaces.
    pub fn validate_value(label: &str, value: &str) -> ValidationResult<()> {
        if value.chars().any(|c| c.is_control()) {
            return Err(ValidationError::InvalidExtensionValue {
                label: label.to_string(),
                reason: "contains control characters".to_string(),
            });
        }
        Ok(())
    }
}
