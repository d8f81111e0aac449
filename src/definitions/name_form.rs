//! Name form definitions.

use super::{
    AttributeTypeRef, Definition, DefinitionKind, ObjectClassRef, Shared, push_unique, refs_equal,
};
use crate::serializer::Formatter;
use crate::value_objects::{Description, Extensions, Flags, Name, Oid};

pub type NameFormRef = Shared<NameForm>;

/// A `nameForms` definition: which attributes may form the RDN of entries
/// of a structural class.
#[derive(Debug, Clone, Default)]
pub struct NameForm {
    pub(crate) oid: Oid,
    pub(crate) name: Name,
    pub(crate) description: Description,
    pub(crate) oc: Option<ObjectClassRef>,
    pub(crate) must: Vec<AttributeTypeRef>,
    pub(crate) may: Vec<AttributeTypeRef>,
    pub(crate) flags: Flags,
    pub(crate) extensions: Extensions,
    pub(crate) formatter: Option<Formatter<NameForm>>,
}

impl NameForm {
    pub fn new(oid: Oid, structural_class: ObjectClassRef) -> Self {
        Self {
            oid,
            oc: Some(structural_class),
            ..Self::default()
        }
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    pub fn structural_class(&self) -> Option<&ObjectClassRef> {
        self.oc.as_ref()
    }

    pub fn set_structural_class(&mut self, class: Option<ObjectClassRef>) {
        self.oc = class;
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
}

impl PartialEq for NameForm {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.name == other.name
            && self.flags == other.flags
            && self.oc == other.oc
            && refs_equal(&self.must, &other.must)
            && refs_equal(&self.may, &other.may)
            && self.extensions == other.extensions
    }
}

impl Definition for NameForm {
    const KIND: DefinitionKind = DefinitionKind::NameForm;

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
