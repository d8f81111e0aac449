//! Textual scanner ("marshal") for schema definitions.
//!
//! One call turns one raw definition string into a typed, validated
//! definition. The text is sanitized, its framing checked, and the leading
//! identifier read; every following label is then looked up in the kind's
//! dispatch table, which names the value grammar to extract and the setter
//! that applies it. Setters resolve references (`SYNTAX`, `SUP`, `EQUALITY`
//! and so on) against the registries supplied in a [`ScanContext`].
//!
//! Any failure aborts the scan and the partially built definition is
//! dropped; nothing is registered by the scanner itself.
//!
//! ```rust
//! use dirschema::definitions::{LdapSyntax, MatchingRule};
//! use dirschema::manifest::Manifest;
//! use dirschema::scanner::{Marshal, ScanContext};
//! use dirschema::serializer::Unmarshal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let syntaxes: Manifest<LdapSyntax> = Manifest::new();
//! syntaxes.set(LdapSyntax::marshal(
//!     "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )",
//!     &ScanContext::new(),
//! )?);
//!
//! let context = ScanContext::new().with_ldap_syntaxes(&syntaxes);
//! let raw = "( 2.5.13.2 NAME 'caseIgnoreMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 X-ORIGIN 'RFC4517' )";
//! let rule = MatchingRule::marshal(raw, &context)?;
//! assert_eq!(rule.unmarshal()?, raw);
//! # Ok(())
//! # }
//! ```

mod lexer;
mod tables;

use crate::definitions::{
    AttributeType, Definition, DitContentRule, DitStructureRule, LdapSyntax, MatchingRule,
    MatchingRuleUse, NameForm, ObjectClass, Shared,
};
use crate::error::{SchemaError, SchemaResult};
use crate::manifest::{Macros, Manifest};
use crate::schema::SchemaConfig;
use crate::validation::Validate;
use crate::value_objects::{Extensions, Oid};
use lexer::{Cursor, Grammar, ScanValue};
use log::{debug, trace};

/// Registries and limits a scan resolves against.
///
/// Every registry is optional; a scan only fails for a missing registry when
/// the text actually references a definition of that kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanContext<'a> {
    pub(crate) config: SchemaConfig,
    pub(crate) macros: Option<&'a Macros>,
    pub(crate) ldap_syntaxes: Option<&'a Manifest<LdapSyntax>>,
    pub(crate) matching_rules: Option<&'a Manifest<MatchingRule>>,
    pub(crate) attribute_types: Option<&'a Manifest<AttributeType>>,
    pub(crate) object_classes: Option<&'a Manifest<ObjectClass>>,
    pub(crate) name_forms: Option<&'a Manifest<NameForm>>,
    pub(crate) dit_structure_rules: Option<&'a Manifest<DitStructureRule>>,
}

impl<'a> ScanContext<'a> {
    /// An empty context with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_macros(mut self, macros: &'a Macros) -> Self {
        self.macros = Some(macros);
        self
    }

    pub fn with_ldap_syntaxes(mut self, manifest: &'a Manifest<LdapSyntax>) -> Self {
        self.ldap_syntaxes = Some(manifest);
        self
    }

    pub fn with_matching_rules(mut self, manifest: &'a Manifest<MatchingRule>) -> Self {
        self.matching_rules = Some(manifest);
        self
    }

    pub fn with_attribute_types(mut self, manifest: &'a Manifest<AttributeType>) -> Self {
        self.attribute_types = Some(manifest);
        self
    }

    pub fn with_object_classes(mut self, manifest: &'a Manifest<ObjectClass>) -> Self {
        self.object_classes = Some(manifest);
        self
    }

    pub fn with_name_forms(mut self, manifest: &'a Manifest<NameForm>) -> Self {
        self.name_forms = Some(manifest);
        self
    }

    pub fn with_dit_structure_rules(mut self, manifest: &'a Manifest<DitStructureRule>) -> Self {
        self.dit_structure_rules = Some(manifest);
        self
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Resolve a leading identifier or macro key to a numeric OID.
    pub(crate) fn resolve_oid(&self, token: &str) -> SchemaResult<Oid> {
        // Aliases start with a letter, so anything else must be numeric.
        if Oid::is_numeric_oid(token) || !token.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Oid::new(token);
        }
        match self.macros {
            Some(macros) => macros.resolve(token),
            None => Err(SchemaError::MissingAliasRegistry {
                token: token.to_string(),
            }),
        }
    }

    /// Find the canonical definition `term` refers to.
    pub(crate) fn resolve<T: Definition>(
        &self,
        manifest: Option<&Manifest<T>>,
        label: &str,
        term: &str,
    ) -> SchemaResult<Shared<T>> {
        let manifest = manifest.ok_or_else(|| SchemaError::MissingRegistry {
            kind: T::KIND,
            term: term.to_string(),
        })?;
        manifest
            .get(term, self.macros)
            .ok_or_else(|| SchemaError::unresolved(label, term))
    }
}

/// Construction of definitions from their textual form.
pub trait Marshal: Sized {
    /// Scan one raw definition string.
    fn marshal(raw: &str, context: &ScanContext<'_>) -> SchemaResult<Self>;
}

/// Scan `raw` into `target`. On failure `target` is left untouched.
pub fn marshal<T: Marshal>(raw: &str, target: &mut T, context: &ScanContext<'_>) -> SchemaResult<()> {
    *target = T::marshal(raw, context)?;
    Ok(())
}

type Apply<T> = fn(&mut T, ScanValue, &ScanContext<'_>) -> SchemaResult<()>;

/// One row of a kind's dispatch table.
pub(crate) struct LabelRule<T> {
    pub(crate) label: &'static str,
    /// Labels sharing a slot are mutually exclusive.
    pub(crate) slot: &'static str,
    pub(crate) grammar: Grammar,
    pub(crate) apply: Apply<T>,
}

impl<T> LabelRule<T> {
    pub(crate) const fn new(label: &'static str, grammar: Grammar, apply: Apply<T>) -> Self {
        Self {
            label,
            slot: label,
            grammar,
            apply,
        }
    }

    pub(crate) const fn in_slot(mut self, slot: &'static str) -> Self {
        self.slot = slot;
        self
    }
}

/// A kind the scanner can build.
pub(crate) trait Scannable: Definition + Validate + Default {
    const LABELS: &'static [LabelRule<Self>];

    /// Apply the leading identifier.
    fn set_identifier(&mut self, token: &str, context: &ScanContext<'_>) -> SchemaResult<()>;

    /// Hook run after the last label, before validation.
    fn finish(&mut self) {}
}

pub(crate) fn scan<T: Scannable>(raw: &str, context: &ScanContext<'_>) -> SchemaResult<T> {
    if raw.trim().is_empty() {
        return Err(SchemaError::EmptyInput);
    }

    let text = lexer::sanitize(raw);
    let mut cursor = Cursor::new(lexer::frame(&text)?);
    let identifier = cursor
        .word()
        .ok_or_else(|| SchemaError::framing("missing leading identifier"))?;

    let mut definition = T::default();
    definition.set_identifier(identifier, context)?;

    let mut seen: Vec<&'static str> = Vec::new();
    while let Some(label) = cursor.word() {
        trace!("Scanning {} label {} for '{}'", T::KIND, label, definition.key());

        if label.starts_with("X-") {
            Extensions::validate_label(label)?;
            if definition.extensions().contains(label) {
                return Err(SchemaError::invalid_value(label, "", "label given more than once"));
            }
            let values = cursor.read(Grammar::QuotedList, label)?.into_list();
            definition.extensions_mut().set(label, values)?;
            continue;
        }

        let rule = T::LABELS
            .iter()
            .find(|rule| rule.label == label)
            .ok_or_else(|| SchemaError::InvalidLabel {
                label: label.to_string(),
            })?;
        if seen.contains(&rule.slot) {
            return Err(SchemaError::invalid_value(label, "", "label given more than once"));
        }
        seen.push(rule.slot);

        let value = cursor.read(rule.grammar, label)?;
        (rule.apply)(&mut definition, value, context)?;
    }

    definition.finish();
    definition.validate_with(&context.config)?;
    debug!("Marshaled {} '{}'", T::KIND, definition.key());
    Ok(definition)
}

macro_rules! impl_marshal {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl Marshal for $kind {
                fn marshal(raw: &str, context: &ScanContext<'_>) -> SchemaResult<Self> {
                    scan(raw, context)
                }
            }
        )+
    };
}

impl_marshal!(
    LdapSyntax,
    MatchingRule,
    AttributeType,
    ObjectClass,
    MatchingRuleUse,
    DitContentRule,
    NameForm,
    DitStructureRule,
);
