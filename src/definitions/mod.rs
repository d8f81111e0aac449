//! The eight directory schema definition kinds and their shared plumbing.
//!
//! Definitions reference each other (an attribute type names its matching
//! rules, an object class its superclasses) through [`Shared`] handles that
//! point at the single canonical instance held by the owning registry. A
//! mutation made through one handle is visible through every other holder.
//!
//! # Key Types
//!
//! - [`Definition`] - identity, naming, flags and lookup behaviour common to all kinds
//! - [`Shared`] - reference-counted handle to a canonical definition
//! - [`DefinitionKind`] - discriminant used in errors and logs

pub mod attribute_type;
pub mod dit_content_rule;
pub mod dit_structure_rule;
pub mod ldap_syntax;
pub mod matching_rule;
pub mod matching_rule_use;
pub mod name_form;
pub mod object_class;

pub use attribute_type::{AttributeType, AttributeTypeRef, Usage};
pub use dit_content_rule::{DitContentRule, DitContentRuleRef};
pub use dit_structure_rule::{DitStructureRule, DitStructureRuleRef};
pub use ldap_syntax::{LdapSyntax, LdapSyntaxRef};
pub use matching_rule::{MatchingRule, MatchingRuleRef};
pub use matching_rule_use::{MatchingRuleUse, MatchingRuleUseRef};
pub use name_form::{NameForm, NameFormRef};
pub use object_class::{Kind, ObjectClass, ObjectClassRef};

use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::{Description, Extensions, Flags, Name};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Discriminant for the definition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefinitionKind {
    LdapSyntax,
    MatchingRule,
    AttributeType,
    ObjectClass,
    MatchingRuleUse,
    DitContentRule,
    NameForm,
    DitStructureRule,
}

impl DefinitionKind {
    /// The attribute name under which a directory publishes this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LdapSyntax => "ldapSyntax",
            Self::MatchingRule => "matchingRule",
            Self::AttributeType => "attributeType",
            Self::ObjectClass => "objectClass",
            Self::MatchingRuleUse => "matchingRuleUse",
            Self::DitContentRule => "dITContentRule",
            Self::NameForm => "nameForm",
            Self::DitStructureRule => "dITStructureRule",
        }
    }

    /// The subschema attribute under which entries of this kind are listed.
    pub fn subschema_attribute(&self) -> &'static str {
        match self {
            Self::LdapSyntax => "ldapSyntaxes",
            Self::MatchingRule => "matchingRules",
            Self::AttributeType => "attributeTypes",
            Self::ObjectClass => "objectClasses",
            Self::MatchingRuleUse => "matchingRuleUse",
            Self::DitContentRule => "dITContentRules",
            Self::NameForm => "nameForms",
            Self::DitStructureRule => "dITStructureRules",
        }
    }

    /// Parse either the kind name or its subschema attribute, ignoring case.
    pub fn from_attribute(attribute: &str) -> Option<Self> {
        [
            Self::LdapSyntax,
            Self::MatchingRule,
            Self::AttributeType,
            Self::ObjectClass,
            Self::MatchingRuleUse,
            Self::DitContentRule,
            Self::NameForm,
            Self::DitStructureRule,
        ]
        .into_iter()
        .find(|kind| {
            kind.as_str().eq_ignore_ascii_case(attribute)
                || kind.subschema_attribute().eq_ignore_ascii_case(attribute)
        })
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Behaviour common to every definition kind.
///
/// Registries, the scanner and the serializer are written against this
/// trait so that each concern is implemented once for all eight kinds.
pub trait Definition: PartialEq + Send + Sync + Sized + 'static {
    /// Which kind this is.
    const KIND: DefinitionKind;

    /// Canonical identity: the dotted OID, or the rule number for structure rules.
    fn key(&self) -> String;

    /// Whether the identity has not been assigned yet.
    fn is_zero(&self) -> bool;

    /// Name set, absent for kinds that carry no `NAME`.
    fn name(&self) -> Option<&Name> {
        None
    }

    fn name_mut(&mut self) -> Option<&mut Name> {
        None
    }

    fn description(&self) -> &Description;

    fn set_description(&mut self, description: Description);

    fn extensions(&self) -> &Extensions;

    fn extensions_mut(&mut self) -> &mut Extensions;

    fn flags(&self) -> Flags;

    fn flags_mut(&mut self) -> &mut Flags;

    /// The flags this kind may carry.
    fn legal_flags() -> Flags {
        Flags::OBSOLETE_ONLY
    }

    /// Whether the definition lists itself as one of its own superiors.
    fn is_self_referential(&self) -> bool {
        false
    }

    /// Exact lookup by a non-identifier term. Names compare case-insensitively.
    fn matches_term(&self, term: &str) -> bool {
        self.name().is_some_and(|name| name.contains(term))
    }

    /// Fallback lookup tried after every exact match failed.
    fn loosely_matches_term(&self, _term: &str) -> bool {
        false
    }

    /// How other definitions refer to this one in text: the primary name
    /// when there is one, the key otherwise.
    fn reference_term(&self) -> String {
        self.name()
            .and_then(Name::primary)
            .map(str::to_string)
            .unwrap_or_else(|| self.key())
    }

    /// Called after a flag changed through [`set_flag`](Self::set_flag).
    fn on_flag_change(&mut self, _flag: Flags, _on: bool) {}

    fn is_obsolete(&self) -> bool {
        self.flags().contains(Flags::OBSOLETE)
    }

    fn set_obsolete(&mut self, obsolete: bool) {
        self.flags_mut().set(Flags::OBSOLETE, obsolete);
    }

    /// Set or clear a flag, rejecting flags this kind cannot carry.
    fn set_flag(&mut self, flag: Flags, on: bool) -> ValidationResult<()> {
        if !Self::legal_flags().contains(flag) {
            return Err(ValidationError::InvalidFlags {
                kind: Self::KIND,
                flags: flag.describe(),
            });
        }
        self.flags_mut().set(flag, on);
        self.on_flag_change(flag, on);
        Ok(())
    }
}

/// Handle to a canonical definition instance.
///
/// Cloning a handle never copies the definition. Equality first compares
/// identity and then falls back to deep equality of the definitions.
pub struct Shared<T>(Arc<RwLock<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Lock the definition for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Lock the definition for mutation. Changes are visible to every holder.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Whether both handles point at the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Whether this handle points at `value` itself.
    ///
    /// Never takes the lock, so it is safe to call with `value` borrowed
    /// from a guard on this very handle.
    pub fn holds(&self, value: &T) -> bool {
        std::ptr::eq(self.0.data_ptr() as *const T, value)
    }
}

impl<T: Definition> Shared<T> {
    /// Key of the referenced definition.
    pub fn key(&self) -> String {
        self.read().key()
    }

    /// Text used when this definition is referenced from another one.
    pub fn reference_term(&self) -> String {
        self.read().reference_term()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Definition> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.read() == *other.read()
    }
}

impl<T: Definition> fmt::Debug for Shared<T> {
    // Only the key is printed; following references could walk the whole graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({} {})", T::KIND, self.read().key())
    }
}

/// Set equality over reference lists, independent of order.
pub(crate) fn refs_equal<T: Definition>(a: &[Shared<T>], b: &[Shared<T>]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.iter().any(|y| x == y))
}

/// Append a reference unless one with the same key is already present.
pub(crate) fn push_unique<T: Definition>(list: &mut Vec<Shared<T>>, item: Shared<T>) -> bool {
    let key = item.key();
    if list.iter().any(|x| x.ptr_eq(&item) || x.key() == key) {
        return false;
    }
    list.push(item);
    true
}

/// Whether a reference list mentions the given key.
pub(crate) fn refs_contain<T: Definition>(list: &[Shared<T>], key: &str) -> bool {
    list.iter().any(|x| x.key() == key)
}
