//! Configuration and builder for [`Schema`] bundles.

use super::Schema;
use crate::error::{SchemaResult, ValidationError};
use crate::value_objects::Oid;
use crate::value_objects::description::DEFAULT_MAX_DESCRIPTION_LEN;
use crate::value_objects::name::DEFAULT_MAX_NAME_LEN;

/// Limits and policies applied while scanning and validating definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Longest accepted single name. Cannot exceed 256.
    pub max_name_len: usize,

    /// Longest accepted description, in bytes.
    pub max_description_len: usize,

    /// Reject matching rules whose names mark them for a different slot,
    /// such as an ordering rule used for `EQUALITY`.
    pub enforce_matching_rule_heuristics: bool,

    /// Accept definitions of named kinds that carry no `NAME`.
    pub allow_empty_name: bool,
}

impl SchemaConfig {
    pub const DEFAULT: SchemaConfig = SchemaConfig {
        max_name_len: DEFAULT_MAX_NAME_LEN,
        max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        enforce_matching_rule_heuristics: true,
        allow_empty_name: true,
    };

    /// Validate the configuration.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.max_name_len == 0 {
            return Err(ValidationError::custom("max_name_len must be positive").into());
        }

        if self.max_name_len > DEFAULT_MAX_NAME_LEN {
            return Err(ValidationError::custom(format!(
                "max_name_len cannot exceed {}",
                DEFAULT_MAX_NAME_LEN
            ))
            .into());
        }

        if self.max_description_len == 0 {
            return Err(ValidationError::custom("max_description_len must be positive").into());
        }

        Ok(())
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for configuring and creating [`Schema`] bundles.
///
/// # Examples
///
/// ```rust
/// use dirschema::SchemaBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::new()
///     .with_max_description_len(1024)
///     .with_macro("nisSchema", "1.3.6.1.1.1")
///     .build()?;
///
/// assert_eq!(schema.macros().resolve("nisSchema.1.1")?.as_str(), "1.3.6.1.1.1.1.1");
/// assert!(schema.attribute_types().is_empty());
///
/// let loaded = SchemaBuilder::new().with_defaults().build()?;
/// assert!(loaded.attribute_types().exists("cn", None));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    config: SchemaConfig,
    macros: Vec<(String, String)>,
    defaults: bool,
}

impl SchemaBuilder {
    /// Start from the default configuration with no macros.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_max_name_len(mut self, max_len: usize) -> Self {
        self.config.max_name_len = max_len;
        self
    }

    pub fn with_max_description_len(mut self, max_len: usize) -> Self {
        self.config.max_description_len = max_len;
        self
    }

    /// Toggle the name-based matching rule role check.
    pub fn with_matching_rule_heuristics(mut self, enforce: bool) -> Self {
        self.config.enforce_matching_rule_heuristics = enforce;
        self
    }

    pub fn with_empty_names(mut self, allow: bool) -> Self {
        self.config.allow_empty_name = allow;
        self
    }

    /// Register an OID macro. The OID is checked at [`build`](Self::build).
    pub fn with_macro(mut self, alias: impl Into<String>, oid: impl Into<String>) -> Self {
        self.macros.push((alias.into(), oid.into()));
        self
    }

    /// Populate the registries with the built-in definitions.
    pub fn with_defaults(mut self) -> Self {
        self.defaults = true;
        self
    }

    /// Build the configured schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a macro carries
    /// an invalid alias or OID.
    pub fn build(self) -> SchemaResult<Schema> {
        self.config.validate()?;

        let schema = Schema::with_config(self.config);
        for (alias, oid) in &self.macros {
            schema.macros().set(alias, Oid::new(oid.as_str())?)?;
        }
        if self.defaults {
            schema.load_defaults();
        }
        Ok(schema)
    }
}
