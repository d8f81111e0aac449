//! The schema bundle: every registry a directory schema needs, in one place.
//!
//! A [`Schema`] owns the macro registry and one [`Manifest`] per definition
//! kind, and scans new definitions against all of them. Registration goes
//! through [`Schema::marshal_and_set`], which only inserts a definition that
//! scanned and validated cleanly.
//!
//! # Key Types
//!
//! - [`Schema`] - bundle of the eight registries plus the macro registry
//! - [`SchemaBuilder`] - fluent construction with validated configuration
//! - [`SchemaConfig`] - scanner and validator limits
//! - [`Registered`] - maps a definition kind to its registry in the bundle
//!
//! # Examples
//!
//! ```rust
//! use dirschema::definitions::AttributeType;
//! use dirschema::schema::Schema;
//! use dirschema::serializer::Unmarshal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = Schema::with_defaults();
//! let at = schema.marshal_and_set::<AttributeType>(
//!     "( 1.3.6.1.4.1.56521.1.1 NAME 'nickname' SUP name X-ORIGIN 'example' )",
//! )?;
//! assert!(schema.attribute_types().exists("nickname", None));
//! assert_eq!(
//!     at.read().unmarshal()?,
//!     "( 1.3.6.1.4.1.56521.1.1 NAME 'nickname' SUP name X-ORIGIN 'example' )"
//! );
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod embedded;


// Re-export the main types for convenience
pub use builder::{SchemaBuilder, SchemaConfig};

use crate::definitions::{
    AttributeType, Definition, DefinitionKind, DitContentRule, DitStructureRule, LdapSyntax,
    MatchingRule, MatchingRuleUse, NameForm, ObjectClass, Shared,
};
use crate::error::{SchemaError, SchemaResult};
use crate::manifest::{Macros, Manifest};
use crate::scanner::{Marshal, ScanContext};
use log::{debug, info};

/// All registries of a directory schema.
#[derive(Debug, Default)]
pub struct Schema {
    config: SchemaConfig,
    macros: Macros,
    ldap_syntaxes: Manifest<LdapSyntax>,
    matching_rules: Manifest<MatchingRule>,
    attribute_types: Manifest<AttributeType>,
    object_classes: Manifest<ObjectClass>,
    matching_rule_uses: Manifest<MatchingRuleUse>,
    dit_content_rules: Manifest<DitContentRule>,
    name_forms: Manifest<NameForm>,
    dit_structure_rules: Manifest<DitStructureRule>,
}

impl Schema {
    /// Create an empty schema with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty schema with the given configuration.
    ///
    /// The configuration is used as is; [`SchemaBuilder`] validates it first.
    pub fn with_config(config: SchemaConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a schema populated with the built-in standard definitions.
    pub fn with_defaults() -> Self {
        let schema = Self::new();
        schema.load_defaults();
        schema
    }

    /// Register the built-in syntaxes, matching rules, attribute types and
    /// object classes, then derive their matching rule uses.
    ///
    /// # Panics
    ///
    /// Panics if a built-in definition fails to scan; the embedded set is
    /// fixed at compile time, so this indicates corrupt data in the crate.
    pub fn load_defaults(&self) {
        fn load<T: Registered>(schema: &Schema, definitions: &[&str]) {
            for raw in definitions {
                if let Err(e) = schema.marshal_and_set::<T>(raw) {
                    panic!("Failed to load built-in {} '{}': {}", T::KIND, raw, e);
                }
            }
        }

        load::<LdapSyntax>(self, embedded::ldap_syntaxes());
        load::<MatchingRule>(self, embedded::matching_rules());
        load::<AttributeType>(self, embedded::attribute_types());
        load::<ObjectClass>(self, embedded::object_classes());
        self.refresh_matching_rule_uses();

        info!(
            "Loaded default schema: {} syntaxes, {} matching rules, {} attribute types, {} object classes",
            self.ldap_syntaxes.len(),
            self.matching_rules.len(),
            self.attribute_types.len(),
            self.object_classes.len()
        );
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    pub fn macros(&self) -> &Macros {
        &self.macros
    }

    pub fn ldap_syntaxes(&self) -> &Manifest<LdapSyntax> {
        &self.ldap_syntaxes
    }

    pub fn matching_rules(&self) -> &Manifest<MatchingRule> {
        &self.matching_rules
    }

    pub fn attribute_types(&self) -> &Manifest<AttributeType> {
        &self.attribute_types
    }

    pub fn object_classes(&self) -> &Manifest<ObjectClass> {
        &self.object_classes
    }

    pub fn matching_rule_uses(&self) -> &Manifest<MatchingRuleUse> {
        &self.matching_rule_uses
    }

    pub fn dit_content_rules(&self) -> &Manifest<DitContentRule> {
        &self.dit_content_rules
    }

    pub fn name_forms(&self) -> &Manifest<NameForm> {
        &self.name_forms
    }

    pub fn dit_structure_rules(&self) -> &Manifest<DitStructureRule> {
        &self.dit_structure_rules
    }

    /// A scan context wired to every registry of this schema.
    pub fn context(&self) -> ScanContext<'_> {
        ScanContext::new()
            .with_config(self.config)
            .with_macros(&self.macros)
            .with_ldap_syntaxes(&self.ldap_syntaxes)
            .with_matching_rules(&self.matching_rules)
            .with_attribute_types(&self.attribute_types)
            .with_object_classes(&self.object_classes)
            .with_name_forms(&self.name_forms)
            .with_dit_structure_rules(&self.dit_structure_rules)
    }

    /// Scan a definition against this schema without registering it.
    pub fn marshal<T: Marshal>(&self, raw: &str) -> SchemaResult<T> {
        T::marshal(raw, &self.context())
    }

    /// Scan a definition and insert it into its registry.
    ///
    /// Returns the canonical handle. When a definition with the same key is
    /// already registered the registry is left unchanged and the existing
    /// handle is returned. A name held by a different member is an error.
    pub fn marshal_and_set<T: Registered>(&self, raw: &str) -> SchemaResult<Shared<T>> {
        let definition = Shared::new(self.marshal::<T>(raw)?);
        let manifest = T::manifest(self);

        if manifest.insert(definition.clone())? {
            return Ok(definition);
        }
        let key = definition.key();
        manifest.by_key(&key).ok_or(SchemaError::ZeroInstance { kind: T::KIND })
    }

    /// Register a definition published under the given subschema attribute,
    /// such as `attributeTypes` or `objectClasses`. Returns the key.
    pub fn register(&self, attribute: &str, raw: &str) -> SchemaResult<String> {
        let kind = DefinitionKind::from_attribute(attribute).ok_or_else(|| {
            SchemaError::UnsupportedTarget {
                kind: attribute.to_string(),
            }
        })?;

        let key = match kind {
            DefinitionKind::LdapSyntax => self.marshal_and_set::<LdapSyntax>(raw)?.key(),
            DefinitionKind::MatchingRule => self.marshal_and_set::<MatchingRule>(raw)?.key(),
            DefinitionKind::AttributeType => self.marshal_and_set::<AttributeType>(raw)?.key(),
            DefinitionKind::ObjectClass => self.marshal_and_set::<ObjectClass>(raw)?.key(),
            DefinitionKind::MatchingRuleUse => self.marshal_and_set::<MatchingRuleUse>(raw)?.key(),
            DefinitionKind::DitContentRule => self.marshal_and_set::<DitContentRule>(raw)?.key(),
            DefinitionKind::NameForm => self.marshal_and_set::<NameForm>(raw)?.key(),
            DefinitionKind::DitStructureRule => {
                self.marshal_and_set::<DitStructureRule>(raw)?.key()
            }
        };
        debug!("Registered {} '{}' via {}", kind, key, attribute);
        Ok(key)
    }

    /// Derive matching rule uses from the registered attribute types.
    /// Returns how many `APPLIES` entries were added.
    pub fn refresh_matching_rule_uses(&self) -> usize {
        self.matching_rule_uses.refresh(&self.attribute_types)
    }
}

/// A definition kind with a registry in [`Schema`].
pub trait Registered: Definition + Marshal {
    fn manifest(schema: &Schema) -> &Manifest<Self>;
}

macro_rules! impl_registered {
    ($($kind:ty => $field:ident),+ $(,)?) => {
        $(
            impl Registered for $kind {
                fn manifest(schema: &Schema) -> &Manifest<Self> {
                    &schema.$field
                }
            }
        )+
    };
}

impl_registered!(
    LdapSyntax => ldap_syntaxes,
    MatchingRule => matching_rules,
    AttributeType => attribute_types,
    ObjectClass => object_classes,
    MatchingRuleUse => matching_rule_uses,
    DitContentRule => dit_content_rules,
    NameForm => name_forms,
    DitStructureRule => dit_structure_rules,
);
