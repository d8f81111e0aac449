//! DIT content rule definitions.
//!
//! A content rule is keyed by the OID of the structural object class it
//! governs and widens or narrows the attributes entries of that class carry.

use super::{
    AttributeTypeRef, Definition, DefinitionKind, ObjectClassRef, Shared, push_unique, refs_equal,
};
use crate::serializer::Formatter;
use crate::value_objects::{Description, Extensions, Flags, Name, Oid};

pub type DitContentRuleRef = Shared<DitContentRule>;

/// A `dITContentRules` definition.
#[derive(Debug, Clone, Default)]
pub struct DitContentRule {
    pub(crate) oid: Oid,
    pub(crate) name: Name,
    pub(crate) description: Description,
    /// The structural class sharing this rule's OID.
    pub(crate) structural: Option<ObjectClassRef>,
    pub(crate) aux: Vec<ObjectClassRef>,
    pub(crate) must: Vec<AttributeTypeRef>,
    pub(crate) may: Vec<AttributeTypeRef>,
    pub(crate) not: Vec<AttributeTypeRef>,
    pub(crate) flags: Flags,
    pub(crate) extensions: Extensions,
    pub(crate) formatter: Option<Formatter<DitContentRule>>,
}

impl DitContentRule {
    /// Create a rule for a structural class. The rule takes the class's OID.
    pub fn new(structural: ObjectClassRef) -> Self {
        let oid = structural.read().oid.clone();
        Self {
            oid,
            structural: Some(structural),
            ..Self::default()
        }
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    pub fn structural_class(&self) -> Option<&ObjectClassRef> {
        self.structural.as_ref()
    }

    pub fn aux(&self) -> &[ObjectClassRef] {
        &self.aux
    }

    pub fn add_aux(&mut self, class: ObjectClassRef) -> bool {
        push_unique(&mut self.aux, class)
    }

    pub fn must(&self) -> &[AttributeTypeRef] {
        &self.must
    }

    pub fn add_must(&mut self, attribute: AttributeTypeRef) -> bool {
        push_unique(&mut self.must, attribute)
    }

    pub fn may(&self) -> &[AttributeTypeRef] {
        &self.may
    }

    pub fn add_may(&mut self, attribute: AttributeTypeRef) -> bool {
        push_unique(&mut self.may, attribute)
    }

    pub fn not(&self) -> &[AttributeTypeRef] {
        &self.not
    }

    pub fn add_not(&mut self, attribute: AttributeTypeRef) -> bool {
        push_unique(&mut self.not, attribute)
    }
}

impl PartialEq for DitContentRule {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.name == other.name
            && self.flags == other.flags
            && refs_equal(&self.aux, &other.aux)
            && refs_equal(&self.must, &other.must)
            && refs_equal(&self.may, &other.may)
            && refs_equal(&self.not, &other.not)
            && self.extensions == other.extensions
    }
}

impl Definition for DitContentRule {
    const KIND: DefinitionKind = DefinitionKind::DitContentRule;

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
