//! DIT structure rule definitions.
//!
//! Structure rules are the one kind keyed by a rule number instead of an
//! OID. They refer to a name form and, optionally, to superior rules.

use super::{Definition, DefinitionKind, NameFormRef, Shared, push_unique, refs_contain, refs_equal};
use crate::error::{ValidationError, ValidationResult};
use crate::serializer::Formatter;
use crate::value_objects::{Description, Extensions, Flags, Name, RuleId};

pub type DitStructureRuleRef = Shared<DitStructureRule>;

/// A `dITStructureRules` definition.
#[derive(Debug, Clone, Default)]
pub struct DitStructureRule {
    pub(crate) rule_id: Option<RuleId>,
    pub(crate) name: Name,
    pub(crate) description: Description,
    pub(crate) form: Option<NameFormRef>,
    pub(crate) superiors: Vec<DitStructureRuleRef>,
    pub(crate) flags: Flags,
    pub(crate) extensions: Extensions,
    pub(crate) formatter: Option<Formatter<DitStructureRule>>,
}

impl DitStructureRule {
    pub fn new(rule_id: RuleId, form: NameFormRef) -> Self {
        Self {
            rule_id: Some(rule_id),
            form: Some(form),
            ..Self::default()
        }
    }

    pub fn rule_id(&self) -> Option<RuleId> {
        self.rule_id
    }

    pub fn form(&self) -> Option<&NameFormRef> {
        self.form.as_ref()
    }

    pub fn set_form(&mut self, form: Option<NameFormRef>) {
        self.form = form;
    }

    pub fn superior_rules(&self) -> &[DitStructureRuleRef] {
        &self.superiors
    }

    /// Add a superior rule. A rule cannot be its own superior.
    pub fn add_superior_rule(&mut self, rule: DitStructureRuleRef) -> ValidationResult<bool> {
        if rule.holds(self)
            || (self.rule_id.is_some() && rule.read().rule_id == self.rule_id)
        {
            return Err(ValidationError::SelfSuperior {
                kind: DefinitionKind::DitStructureRule,
                id: self.key(),
            });
        }
        Ok(push_unique(&mut self.superiors, rule))
    }
}

impl PartialEq for DitStructureRule {
    fn eq(&self, other: &Self) -> bool {
        self.rule_id == other.rule_id
            && self.name == other.name
            && self.flags == other.flags
            && self.form == other.form
            && refs_equal(&self.superiors, &other.superiors)
            && self.extensions == other.extensions
    }
}

impl Definition for DitStructureRule {
    const KIND: DefinitionKind = DefinitionKind::DitStructureRule;

    fn key(&self) -> String {
        self.rule_id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn is_zero(&self) -> bool {
        self.rule_id.is_none()
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
        self.superiors.iter().any(|rule| rule.holds(self))
            || (!self.is_zero() && refs_contain(&self.superiors, &self.key()))
    }

    // Superior rules are always written by number, never by name.
    fn reference_term(&self) -> String {
        self.key()
    }
}
