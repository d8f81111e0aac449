//! Matching rule definitions.

use super::{Definition, DefinitionKind, LdapSyntaxRef, Shared};
use crate::serializer::Formatter;
use crate::value_objects::{Description, Extensions, Flags, Name, Oid};

pub type MatchingRuleRef = Shared<MatchingRule>;

/// The role a matching rule plays when referenced from an attribute type.
///
/// Directories don't record this on the rule itself; it is inferred from
/// the rule's names (`caseIgnoreOrderingMatch`, `caseIgnoreSubstringsMatch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingRuleRole {
    Equality,
    Ordering,
    Substring,
}

impl MatchingRuleRole {
    /// Label used for this slot in an attribute type definition.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equality => "EQUALITY",
            Self::Ordering => "ORDERING",
            Self::Substring => "SUBSTR",
        }
    }
}

/// A `matchingRules` definition.
#[derive(Debug, Clone, Default)]
pub struct MatchingRule {
    pub(crate) oid: Oid,
    pub(crate) name: Name,
    pub(crate) description: Description,
    pub(crate) syntax: Option<LdapSyntaxRef>,
    pub(crate) flags: Flags,
    pub(crate) extensions: Extensions,
    pub(crate) formatter: Option<Formatter<MatchingRule>>,
}

impl MatchingRule {
    pub fn new(oid: Oid, syntax: LdapSyntaxRef) -> Self {
        Self {
            oid,
            syntax: Some(syntax),
            ..Self::default()
        }
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    pub fn syntax(&self) -> Option<&LdapSyntaxRef> {
        self.syntax.as_ref()
    }

    pub fn set_syntax(&mut self, syntax: Option<LdapSyntaxRef>) {
        self.syntax = syntax;
    }

    /// Infer the rule's role from its names. Unnamed rules have no role.
    pub fn role(&self) -> Option<MatchingRuleRole> {
        let mut role = None;
        for name in self.name.iter() {
            let lower = name.to_ascii_lowercase();
            if lower.contains("substring") {
                return Some(MatchingRuleRole::Substring);
            }
            if lower.contains("ordering") {
                role = Some(MatchingRuleRole::Ordering);
            } else if role.is_none() {
                role = Some(MatchingRuleRole::Equality);
            }
        }
        role
    }
}

impl PartialEq for MatchingRule {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.name == other.name
            && self.flags == other.flags
            && self.syntax == other.syntax
            && self.extensions == other.extensions
    }
}

impl Definition for MatchingRule {
    const KIND: DefinitionKind = DefinitionKind::MatchingRule;

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
