//! RuleId value object for DIT structure rule identifiers.

use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative integer identifying a DIT structure rule.
///
/// Unlike every other definition kind, structure rules are keyed by a plain
/// rule number rather than an OID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(u32);

impl RuleId {
    /// Create a RuleId from a number.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Parse a bare decimal token.
    ///
    /// Signs, whitespace and leading zeros (other than `0` itself) are rejected.
    pub fn parse(token: &str) -> SchemaResult<Self> {
        let invalid = || SchemaError::InvalidRuleId {
            value: token.to_string(),
        };

        if token.is_empty()
            || !token.bytes().all(|b| b.is_ascii_digit())
            || (token.len() > 1 && token.starts_with('0'))
        {
            return Err(invalid());
        }

        token.parse::<u32>().map(Self).map_err(|_| invalid())
    }

    /// Get the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for RuleId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u32> for RuleId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
