//! Structural validation of assembled definitions.
//!
//! The scanner runs [`Validate::validate_with`] once after every label has
//! been applied; callers that build definitions by hand run it themselves
//! before registering. Checks fall into two groups: rules common to every
//! kind (identifier, legal flags, name and description limits, extension
//! labels) and the per-kind structural rules below.

use crate::definitions::matching_rule::MatchingRuleRole;
use crate::definitions::{
    AttributeType, Definition, DefinitionKind, DitContentRule, DitStructureRule,
    DitStructureRuleRef, Kind, LdapSyntax, MatchingRule, MatchingRuleRef, MatchingRuleUse,
    NameForm, ObjectClass, ObjectClassRef,
};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::SchemaConfig;
use crate::value_objects::Oid;

/// Per-kind validation rules.
pub trait Validate: Definition {
    /// Validate against the default limits.
    fn validate(&self) -> ValidationResult<()> {
        self.validate_with(&SchemaConfig::DEFAULT)
    }

    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()>;
}

/// Checks shared by every kind.
fn validate_common<T: Definition>(definition: &T, config: &SchemaConfig) -> ValidationResult<()> {
    if definition.is_zero() {
        return Err(ValidationError::MissingIdentifier { kind: T::KIND });
    }

    let illegal = definition.flags().difference(T::legal_flags());
    if !illegal.is_empty() {
        return Err(ValidationError::InvalidFlags {
            kind: T::KIND,
            flags: illegal.describe(),
        });
    }

    if let Some(name) = definition.name() {
        name.validate(config.max_name_len)?;
        if name.is_empty() && !config.allow_empty_name {
            return Err(ValidationError::invalid_name(
                "",
                format!("{} '{}' requires at least one name", T::KIND, definition.key()),
            ));
        }
    }

    definition
        .description()
        .validate(config.max_description_len)?;
    definition.extensions().validate()
}

impl Validate for LdapSyntax {
    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()> {
        validate_common(self, config)?;
        if self.description.is_empty() {
            return Err(ValidationError::MissingDescription {
                kind: DefinitionKind::LdapSyntax,
                oid: self.key(),
            });
        }
        Ok(())
    }
}

impl Validate for MatchingRule {
    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()> {
        validate_common(self, config)?;
        if self.syntax.is_none() {
            return Err(ValidationError::MissingSyntax {
                kind: DefinitionKind::MatchingRule,
                oid: self.key(),
            });
        }
        Ok(())
    }
}

impl Validate for AttributeType {
    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()> {
        validate_common(self, config)?;
        let oid = self.key();

        if self.is_self_referential() {
            return Err(ValidationError::SelfSuperior {
                kind: DefinitionKind::AttributeType,
                id: oid,
            });
        }
        if self.has_cyclic_chain() {
            return Err(ValidationError::CyclicSuperior {
                kind: DefinitionKind::AttributeType,
                id: oid,
            });
        }

        if self.is_collective() && self.is_single_value() {
            return Err(ValidationError::CollectiveSingleValue { oid });
        }
        if self.is_collective() && self.usage.is_operational() {
            return Err(ValidationError::CollectiveOperational { oid });
        }
        if self.is_no_user_modification() && !self.usage.is_operational() {
            return Err(ValidationError::UserModifiableUsage { oid });
        }

        if self.syntax.is_none() {
            if self.mub.is_some() {
                return Err(ValidationError::BoundWithoutSyntax { oid });
            }
            if self.sup.is_none() {
                return Err(ValidationError::MissingSyntax {
                    kind: DefinitionKind::AttributeType,
                    oid,
                });
            }
            if self.effective_syntax().is_none() {
                return Err(ValidationError::UnresolvedSyntaxChain { oid });
            }
        }

        if config.enforce_matching_rule_heuristics {
            check_rule_slot(self.equality.as_ref(), MatchingRuleRole::Equality)?;
            check_rule_slot(self.ordering.as_ref(), MatchingRuleRole::Ordering)?;
            check_rule_slot(self.substring.as_ref(), MatchingRuleRole::Substring)?;
        }

        Ok(())
    }
}

/// Reject a matching rule whose names mark it for a different slot. A rule
/// without names carries no role and fits any slot.
fn check_rule_slot(rule: Option<&MatchingRuleRef>, slot: MatchingRuleRole) -> ValidationResult<()> {
    let Some(rule) = rule else {
        return Ok(());
    };
    let rule = rule.read();
    if rule.role().is_some_and(|role| role != slot) {
        return Err(ValidationError::MatchingRuleKindMismatch {
            rule: rule.reference_term(),
            slot: slot.label().to_string(),
        });
    }
    Ok(())
}

impl Validate for ObjectClass {
    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()> {
        validate_common(self, config)?;
        let oid = self.key();

        if self.is_self_referential() {
            return Err(ValidationError::SelfSuperior {
                kind: DefinitionKind::ObjectClass,
                id: oid,
            });
        }

        for superior in &self.sup {
            let superior = superior.read();
            let allowed = match self.kind {
                Kind::Abstract => superior.kind == Kind::Abstract,
                Kind::Auxiliary => superior.kind != Kind::Structural,
                Kind::Structural => superior.kind != Kind::Auxiliary,
            };
            if !allowed {
                return Err(ValidationError::SuperiorKindConflict {
                    oid,
                    kind: self.kind.to_string(),
                    superior: superior.reference_term(),
                    superior_kind: superior.kind.to_string(),
                });
            }
        }

        if reaches_class(&self.sup, &self.oid) {
            return Err(ValidationError::CyclicSuperior {
                kind: DefinitionKind::ObjectClass,
                id: oid,
            });
        }

        Ok(())
    }
}

/// Whether walking up from `start` ever arrives back at `oid`.
fn reaches_class(start: &[ObjectClassRef], oid: &Oid) -> bool {
    let mut visited = Vec::new();
    let mut queue: Vec<ObjectClassRef> = start.to_vec();
    while let Some(class) = queue.pop() {
        let class = class.read();
        if class.oid == *oid {
            return true;
        }
        if visited.contains(&class.oid) {
            continue;
        }
        visited.push(class.oid.clone());
        queue.extend(class.sup.iter().cloned());
    }
    false
}

impl Validate for MatchingRuleUse {
    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()> {
        validate_common(self, config)?;
        if self.applies.is_empty() {
            return Err(ValidationError::EmptyApplies { oid: self.key() });
        }
        Ok(())
    }
}

impl Validate for DitContentRule {
    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()> {
        validate_common(self, config)?;
        let oid = self.key();

        let structural = self
            .structural
            .as_ref()
            .is_some_and(|class| class.read().is_structural());
        if !structural {
            return Err(ValidationError::NonStructuralContentRule { oid });
        }

        for class in &self.aux {
            let class = class.read();
            if !class.is_auxiliary() {
                return Err(ValidationError::InvalidAuxiliaryClass {
                    oid,
                    class: class.reference_term(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for NameForm {
    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()> {
        validate_common(self, config)?;
        let oid = self.key();

        let Some(class) = self.oc.as_ref() else {
            return Err(ValidationError::invalid_name_form(
                oid,
                "missing structural object class",
            ));
        };
        if !class.read().is_structural() {
            return Err(ValidationError::invalid_name_form(
                oid,
                format!("object class '{}' is not structural", class.reference_term()),
            ));
        }
        if self.must.is_empty() {
            return Err(ValidationError::invalid_name_form(
                oid,
                "at least one MUST attribute is required",
            ));
        }

        Ok(())
    }
}

impl Validate for DitStructureRule {
    fn validate_with(&self, config: &SchemaConfig) -> ValidationResult<()> {
        let mut visited = vec![self.key()];
        validate_structure_rule(self, config, &mut visited)
    }
}

// Superior rules are validated in turn; `visited` stops the descent on cycles.
fn validate_structure_rule(
    rule: &DitStructureRule,
    config: &SchemaConfig,
    visited: &mut Vec<String>,
) -> ValidationResult<()> {
    validate_common(rule, config)?;

    if rule.is_self_referential() {
        return Err(ValidationError::SelfSuperior {
            kind: DefinitionKind::DitStructureRule,
            id: rule.key(),
        });
    }
    if rule.form.is_none() {
        return Err(ValidationError::MissingForm {
            rule_id: rule.key(),
        });
    }

    let pending: Vec<DitStructureRuleRef> = rule
        .superiors
        .iter()
        .filter(|superior| !visited.contains(&superior.key()))
        .cloned()
        .collect();
    for superior in pending {
        visited.push(superior.key());
        validate_structure_rule(&superior.read(), config, visited)?;
    }

    Ok(())
}
