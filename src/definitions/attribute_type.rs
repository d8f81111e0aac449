//! Attribute type definitions.
//!
//! Attribute types form a single-inheritance tree through `SUP`. A subtype
//! that omits its syntax or matching rules inherits them from the nearest
//! supertype that declares one; the `effective_*` accessors perform that walk.

use super::{Definition, DefinitionKind, LdapSyntaxRef, MatchingRuleRef, Shared};
use crate::error::{ValidationError, ValidationResult};
use crate::serializer::Formatter;
use crate::value_objects::{Description, Extensions, Flags, Name, Oid};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type AttributeTypeRef = Shared<AttributeType>;

/// Upper bound on supertype chain length before it is treated as cyclic.
const MAX_CHAIN_DEPTH: usize = 64;

/// How an attribute is used by the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Usage {
    /// Ordinary user attribute.
    #[default]
    #[serde(rename = "userApplications")]
    UserApplications,
    #[serde(rename = "directoryOperation")]
    DirectoryOperation,
    #[serde(rename = "distributedOperation")]
    DistributedOperation,
    #[serde(rename = "dSAOperation")]
    DsaOperation,
}

impl Usage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserApplications => "userApplications",
            Self::DirectoryOperation => "directoryOperation",
            Self::DistributedOperation => "distributedOperation",
            Self::DsaOperation => "dSAOperation",
        }
    }

    /// Parse a usage token. Matching is case-insensitive.
    pub fn parse(token: &str) -> Option<Self> {
        [
            Self::UserApplications,
            Self::DirectoryOperation,
            Self::DistributedOperation,
            Self::DsaOperation,
        ]
        .into_iter()
        .find(|usage| usage.as_str().eq_ignore_ascii_case(token))
    }

    pub fn is_operational(&self) -> bool {
        !matches!(self, Self::UserApplications)
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An `attributeTypes` definition.
///
/// ```rust
/// use dirschema::definitions::{AttributeType, Definition, Shared};
/// use dirschema::value_objects::{Flags, Oid};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let name = Shared::new(AttributeType::new(Oid::new("2.5.4.41")?));
/// let mut cn = AttributeType::new(Oid::new("2.5.4.3")?);
/// cn.set_super_type(Some(name.clone()))?;
/// cn.set_flag(Flags::SINGLE_VALUE, true)?;
/// assert!(cn.is_subtype_of(&name));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeType {
    pub(crate) oid: Oid,
    pub(crate) name: Name,
    pub(crate) description: Description,
    pub(crate) sup: Option<AttributeTypeRef>,
    pub(crate) equality: Option<MatchingRuleRef>,
    pub(crate) ordering: Option<MatchingRuleRef>,
    pub(crate) substring: Option<MatchingRuleRef>,
    pub(crate) syntax: Option<LdapSyntaxRef>,
    /// Minimum upper bound carried by the `SYNTAX` value as `{n}`.
    pub(crate) mub: Option<u32>,
    pub(crate) usage: Usage,
    pub(crate) flags: Flags,
    pub(crate) extensions: Extensions,
    pub(crate) formatter: Option<Formatter<AttributeType>>,
}

impl AttributeType {
    pub fn new(oid: Oid) -> Self {
        Self {
            oid,
            ..Self::default()
        }
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    pub fn super_type(&self) -> Option<&AttributeTypeRef> {
        self.sup.as_ref()
    }

    /// Set the supertype. An attribute type cannot be its own supertype.
    pub fn set_super_type(&mut self, sup: Option<AttributeTypeRef>) -> ValidationResult<()> {
        if let Some(sup) = &sup {
            if sup.holds(self) || (!self.oid.is_zero() && sup.read().oid == self.oid) {
                return Err(ValidationError::SelfSuperior {
                    kind: DefinitionKind::AttributeType,
                    id: self.oid.to_string(),
                });
            }
        }
        self.sup = sup;
        Ok(())
    }

    pub fn equality(&self) -> Option<&MatchingRuleRef> {
        self.equality.as_ref()
    }

    pub fn set_equality(&mut self, rule: Option<MatchingRuleRef>) {
        self.equality = rule;
    }

    pub fn ordering(&self) -> Option<&MatchingRuleRef> {
        self.ordering.as_ref()
    }

    pub fn set_ordering(&mut self, rule: Option<MatchingRuleRef>) {
        self.ordering = rule;
    }

    pub fn substring(&self) -> Option<&MatchingRuleRef> {
        self.substring.as_ref()
    }

    pub fn set_substring(&mut self, rule: Option<MatchingRuleRef>) {
        self.substring = rule;
    }

    /// The locally declared syntax, without inheritance.
    pub fn syntax(&self) -> Option<&LdapSyntaxRef> {
        self.syntax.as_ref()
    }

    /// Set the local syntax. Clearing it also clears the length bound.
    pub fn set_syntax(&mut self, syntax: Option<LdapSyntaxRef>) {
        if syntax.is_none() {
            self.mub = None;
        }
        self.syntax = syntax;
    }

    /// Minimum upper bound on value length, from `SYNTAX oid{n}`.
    pub fn min_upper_bound(&self) -> Option<u32> {
        self.mub
    }

    pub fn set_min_upper_bound(&mut self, mub: Option<u32>) {
        self.mub = mub;
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    pub fn set_usage(&mut self, usage: Usage) {
        self.usage = usage;
    }

    pub fn is_operational(&self) -> bool {
        self.usage.is_operational()
    }

    pub fn is_single_value(&self) -> bool {
        self.flags.contains(Flags::SINGLE_VALUE)
    }

    pub fn is_collective(&self) -> bool {
        self.flags.contains(Flags::COLLECTIVE)
    }

    pub fn is_no_user_modification(&self) -> bool {
        self.flags.contains(Flags::NO_USER_MODIFICATION)
    }

    /// Visit the supertype chain nearest first, returning the first value
    /// `f` produces. Stops if the chain loops back on an already seen OID.
    pub fn walk_super_types<R>(&self, mut f: impl FnMut(&AttributeType) -> Option<R>) -> Option<R> {
        let mut seen = vec![self.oid.clone()];
        let mut next = self.sup.clone();
        while let Some(current) = next {
            let at = current.read();
            if seen.contains(&at.oid) || seen.len() > MAX_CHAIN_DEPTH {
                return None;
            }
            if let Some(found) = f(&*at) {
                return Some(found);
            }
            seen.push(at.oid.clone());
            next = at.sup.clone();
        }
        None
    }

    /// Whether the supertype chain revisits an OID.
    pub fn has_cyclic_chain(&self) -> bool {
        let mut seen = vec![self.oid.clone()];
        let mut next = self.sup.clone();
        while let Some(current) = next {
            let at = current.read();
            if seen.contains(&at.oid) || seen.len() > MAX_CHAIN_DEPTH {
                return true;
            }
            seen.push(at.oid.clone());
            next = at.sup.clone();
        }
        false
    }

    /// The local syntax, or the nearest one inherited through `SUP`.
    pub fn effective_syntax(&self) -> Option<LdapSyntaxRef> {
        self.syntax
            .clone()
            .or_else(|| self.walk_super_types(|at| at.syntax.clone()))
    }

    pub fn effective_equality(&self) -> Option<MatchingRuleRef> {
        self.equality
            .clone()
            .or_else(|| self.walk_super_types(|at| at.equality.clone()))
    }

    pub fn effective_ordering(&self) -> Option<MatchingRuleRef> {
        self.ordering
            .clone()
            .or_else(|| self.walk_super_types(|at| at.ordering.clone()))
    }

    pub fn effective_substring(&self) -> Option<MatchingRuleRef> {
        self.substring
            .clone()
            .or_else(|| self.walk_super_types(|at| at.substring.clone()))
    }

    /// Whether `other` appears anywhere on this type's supertype chain.
    pub fn is_subtype_of(&self, other: &AttributeTypeRef) -> bool {
        let target = other.read().oid.clone();
        self.walk_super_types(|at| (at.oid == target).then_some(()))
            .is_some()
    }
}

impl PartialEq for AttributeType {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.name == other.name
            && self.flags == other.flags
            && self.usage == other.usage
            && self.mub == other.mub
            && self.sup == other.sup
            && self.equality == other.equality
            && self.ordering == other.ordering
            && self.substring == other.substring
            && self.syntax == other.syntax
            && self.extensions == other.extensions
    }
}

impl Definition for AttributeType {
    const KIND: DefinitionKind = DefinitionKind::AttributeType;

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

    fn legal_flags() -> Flags {
        Flags::ATTRIBUTE_TYPE_LEGAL
    }

    fn is_self_referential(&self) -> bool {
        self.sup
            .as_ref()
            .is_some_and(|sup| sup.holds(self) || sup.read().oid == self.oid)
    }
}
