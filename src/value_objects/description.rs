//! Description value object and quoted-string escaping.
//!
//! Descriptions are free text carried in `DESC` and never take part in
//! definition equality. The escaping helpers here implement the `qdstring`
//! rules: a single quote is written as `\27` and a backslash as `\5C`.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default upper bound on description length, in bytes.
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 4096;

/// Optional free-text description. The empty string means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Create a description, validated against the default length limit.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        Self::validate_text(&value, DEFAULT_MAX_DESCRIPTION_LEN)?;
        Ok(Self(value))
    }

    /// Create a description from raw bytes, which must be UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> ValidationResult<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| ValidationError::InvalidDescription {
            reason: format!("not valid UTF-8: {}", e),
        })?;
        Self::new(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the description against a length limit.
    pub fn validate(&self, max_len: usize) -> ValidationResult<()> {
        Self::validate_text(&self.0, max_len)
    }

    fn validate_text(value: &str, max_len: usize) -> ValidationResult<()> {
        if value.len() > max_len {
            return Err(ValidationError::InvalidDescription {
                reason: format!("exceeds {} bytes", max_len),
            });
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(ValidationError::InvalidDescription {
                reason: "contains control characters".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Escape text for placement between single quotes.
pub fn escape_qdstring(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\27"),
            '\\' => out.push_str("\\5C"),
            other => out.push(other),
        }
    }
    out
}

/// Reverse [`escape_qdstring`]. Hex digits are accepted in either case.
///
/// A backslash not followed by `27` or `5C` is kept literally.
pub fn unescape_qdstring(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let escape = tail.get(..2).map(str::to_ascii_uppercase);
        match escape.as_deref() {
            Some("27") => {
                out.push('\'');
                rest = &tail[2..];
            }
            Some("5C") => {
                out.push('\\');
                rest = &tail[2..];
            }
            _ => {
                out.push('\\');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
