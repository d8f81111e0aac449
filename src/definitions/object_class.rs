//! Object class definitions.

use super::{
    AttributeTypeRef, Definition, DefinitionKind, Shared, push_unique, refs_contain, refs_equal,
};
use crate::error::{ValidationError, ValidationResult};
use crate::serializer::Formatter;
use crate::value_objects::{Description, Extensions, Flags, Name, Oid};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ObjectClassRef = Shared<ObjectClass>;

/// Object class kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    #[default]
    Structural,
    Abstract,
    Auxiliary,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "STRUCTURAL",
            Self::Abstract => "ABSTRACT",
            Self::Auxiliary => "AUXILIARY",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An `objectClasses` definition.
#[derive(Debug, Clone, Default)]
pub struct ObjectClass {
    pub(crate) oid: Oid,
    pub(crate) name: Name,
    pub(crate) description: Description,
    pub(crate) kind: Kind,
    pub(crate) sup: Vec<ObjectClassRef>,
    pub(crate) must: Vec<AttributeTypeRef>,
    pub(crate) may: Vec<AttributeTypeRef>,
    pub(crate) flags: Flags,
    pub(crate) extensions: Extensions,
    pub(crate) formatter: Option<Formatter<ObjectClass>>,
}

impl ObjectClass {
    pub fn new(oid: Oid, kind: Kind) -> Self {
        Self {
            oid,
            kind,
            ..Self::default()
        }
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }

    pub fn is_structural(&self) -> bool {
        self.kind == Kind::Structural
    }

    pub fn is_auxiliary(&self) -> bool {
        self.kind == Kind::Auxiliary
    }

    pub fn is_abstract(&self) -> bool {
        self.kind == Kind::Abstract
    }

    pub fn super_classes(&self) -> &[ObjectClassRef] {
        &self.sup
    }

    /// Add a superclass. Returns `false` if it was already listed.
    pub fn add_super_class(&mut self, class: ObjectClassRef) -> ValidationResult<bool> {
        if class.holds(self) || (!self.oid.is_zero() && class.read().oid == self.oid) {
            return Err(ValidationError::SelfSuperior {
                kind: DefinitionKind::ObjectClass,
                id: self.oid.to_string(),
            });
        }
        Ok(push_unique(&mut self.sup, class))
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

    /// Required attributes including those inherited from every superclass.
    pub fn all_must(&self) -> Vec<AttributeTypeRef> {
        self.collect_inherited(|oc| &oc.must)
    }

    /// Allowed attributes including those inherited from every superclass.
    pub fn all_may(&self) -> Vec<AttributeTypeRef> {
        self.collect_inherited(|oc| &oc.may)
    }

    fn collect_inherited(
        &self,
        select: impl Fn(&ObjectClass) -> &Vec<AttributeTypeRef>,
    ) -> Vec<AttributeTypeRef> {
        let mut out = Vec::new();
        for attribute in select(self) {
            push_unique(&mut out, attribute.clone());
        }

        let mut visited = vec![self.oid.clone()];
        let mut queue: Vec<ObjectClassRef> = self.sup.clone();
        while let Some(class) = queue.pop() {
            let oc = class.read();
            if visited.contains(&oc.oid) {
                continue;
            }
            visited.push(oc.oid.clone());
            for attribute in select(&*oc) {
                push_unique(&mut out, attribute.clone());
            }
            queue.extend(oc.sup.iter().cloned());
        }
        out
    }

    /// Whether `other` is a direct or indirect superclass.
    pub fn is_subclass_of(&self, other: &ObjectClassRef) -> bool {
        let target = other.read().oid.clone();
        let mut visited = vec![self.oid.clone()];
        let mut queue: Vec<ObjectClassRef> = self.sup.clone();
        while let Some(class) = queue.pop() {
            let oc = class.read();
            if oc.oid == target {
                return true;
            }
            if visited.contains(&oc.oid) {
                continue;
            }
            visited.push(oc.oid.clone());
            queue.extend(oc.sup.iter().cloned());
        }
        false
    }
}

impl PartialEq for ObjectClass {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.name == other.name
            && self.flags == other.flags
            && self.kind == other.kind
            && refs_equal(&self.sup, &other.sup)
            && refs_equal(&self.must, &other.must)
            && refs_equal(&self.may, &other.may)
            && self.extensions == other.extensions
    }
}

impl Definition for ObjectClass {
    const KIND: DefinitionKind = DefinitionKind::ObjectClass;

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

    fn is_self_referential(&self) -> bool {
        self.sup.iter().any(|class| class.holds(self))
            || refs_contain(&self.sup, self.oid.as_str())
    }
}
