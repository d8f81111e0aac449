//! Matching rule use definitions.
//!
//! A matching rule use records which attribute types a matching rule applies
//! to. It shares its OID with the rule and is normally derived from the
//! attribute type registry rather than written by hand; see
//! [`Manifest::refresh`](crate::manifest::Manifest::refresh).

use super::{AttributeTypeRef, Definition, DefinitionKind, MatchingRule, Shared, push_unique, refs_equal};
use crate::serializer::Formatter;
use crate::value_objects::{Description, Extensions, Flags, Name, Oid};

pub type MatchingRuleUseRef = Shared<MatchingRuleUse>;

/// A `matchingRuleUse` definition.
#[derive(Debug, Clone, Default)]
pub struct MatchingRuleUse {
    pub(crate) oid: Oid,
    pub(crate) name: Name,
    pub(crate) description: Description,
    pub(crate) applies: Vec<AttributeTypeRef>,
    pub(crate) flags: Flags,
    pub(crate) extensions: Extensions,
    pub(crate) formatter: Option<Formatter<MatchingRuleUse>>,
}

impl MatchingRuleUse {
    pub fn new(oid: Oid) -> Self {
        Self {
            oid,
            ..Self::default()
        }
    }

    /// Start an empty use for a matching rule, carrying over its identity
    /// and names.
    pub fn for_rule(rule: &MatchingRule) -> Self {
        Self {
            oid: rule.oid.clone(),
            name: rule.name.clone(),
            ..Self::default()
        }
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    pub fn applies(&self) -> &[AttributeTypeRef] {
        &self.applies
    }

    /// Add an attribute type. Returns `false` if one with the same OID is
    /// already listed.
    pub fn add_applies(&mut self, attribute: AttributeTypeRef) -> bool {
        push_unique(&mut self.applies, attribute)
    }
}

impl PartialEq for MatchingRuleUse {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.name == other.name
            && self.flags == other.flags
            && refs_equal(&self.applies, &other.applies)
            && self.extensions == other.extensions
    }
}

impl Definition for MatchingRuleUse {
    const KIND: DefinitionKind = DefinitionKind::MatchingRuleUse;

    fn key(&self) -> String {
        self.oid.to_string()
    }

    fn is_zero(&self) -> bool {
        self.oid.is_zero()
    }

    fn name(&self) -> Option<&Name> {
        Some(&self.name)
    }

    fn name_mut(&mut self) -> Option<&mut Name> {
        Some(&mut self.name)
    }

    fn description(&self) -> &Description {
        &self.description
    }

    fn set_description(&mut self, description: Description) {
        self.description = description;
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn flags(&self) -> Flags {
        self.flags
    }

    fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }
}
