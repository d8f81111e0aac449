//! Label dispatch tables, one per definition kind.
//!
//! Each row maps a label to the grammar of its value and the setter that
//! applies it. Setters that take references resolve them through the
//! [`ScanContext`] registries.

use super::lexer::{Grammar, ScanValue};
use super::{LabelRule, ScanContext, Scannable};
use crate::definitions::{
    AttributeType, AttributeTypeRef, Definition, DitContentRule, DitStructureRule, Kind,
    LdapSyntax, MatchingRule, MatchingRuleRef, MatchingRuleUse, NameForm, ObjectClass,
    ObjectClassRef, Usage,
};
use crate::error::{SchemaError, SchemaResult};
use crate::value_objects::{Description, Flags, Name, RuleId};

fn set_name<T: Definition>(
    definition: &mut T,
    value: ScanValue,
    context: &ScanContext<'_>,
) -> SchemaResult<()> {
    let names = definition.name_mut().ok_or_else(|| SchemaError::InvalidLabel {
        label: "NAME".to_string(),
    })?;
    for name in value.into_list() {
        Name::validate_descr(&name, context.config.max_name_len)?;
        names.push(name)?;
    }
    Ok(())
}

fn set_description<T: Definition>(
    definition: &mut T,
    value: ScanValue,
    context: &ScanContext<'_>,
) -> SchemaResult<()> {
    let description = Description::new(value.into_text())?;
    description.validate(context.config.max_description_len)?;
    definition.set_description(description);
    Ok(())
}

fn set_obsolete<T: Definition>(
    definition: &mut T,
    _: ScanValue,
    _: &ScanContext<'_>,
) -> SchemaResult<()> {
    definition.set_obsolete(true);
    Ok(())
}

const fn name<T: Definition>() -> LabelRule<T> {
    LabelRule::new("NAME", Grammar::QuotedList, set_name::<T>)
}

const fn desc<T: Definition>() -> LabelRule<T> {
    LabelRule::new("DESC", Grammar::QuotedString, set_description::<T>)
}

const fn obsolete<T: Definition>() -> LabelRule<T> {
    LabelRule::new("OBSOLETE", Grammar::Bare, set_obsolete::<T>)
}

impl Scannable for LdapSyntax {
    const LABELS: &'static [LabelRule<Self>] = &[desc(), obsolete()];

    fn set_identifier(&mut self, token: &str, context: &ScanContext<'_>) -> SchemaResult<()> {
        self.oid = context.resolve_oid(token)?;
        Ok(())
    }

    fn finish(&mut self) {
        self.sync_flag_from_extension();
    }
}

impl Scannable for MatchingRule {
    const LABELS: &'static [LabelRule<Self>] = &[
        name(),
        desc(),
        obsolete(),
        LabelRule::new("SYNTAX", Grammar::Token, |rule, value, context| {
            let term = value.into_text();
            rule.syntax = Some(context.resolve(context.ldap_syntaxes, "SYNTAX", &term)?);
            Ok(())
        }),
    ];

    fn set_identifier(&mut self, token: &str, context: &ScanContext<'_>) -> SchemaResult<()> {
        self.oid = context.resolve_oid(token)?;
        Ok(())
    }
}

fn matching_rule_slot(
    label: &str,
    value: ScanValue,
    context: &ScanContext<'_>,
) -> SchemaResult<Option<MatchingRuleRef>> {
    let term = value.into_text();
    Ok(Some(context.resolve(context.matching_rules, label, &term)?))
}

fn attribute_flag(attribute: &mut AttributeType, flag: Flags) -> SchemaResult<()> {
    attribute.set_flag(flag, true)?;
    Ok(())
}

impl Scannable for AttributeType {
    const LABELS: &'static [LabelRule<Self>] = &[
        name(),
        desc(),
        obsolete(),
        LabelRule::new("SUP", Grammar::Token, |at, value, context| {
            let term = value.into_text();
            let sup = context.resolve(context.attribute_types, "SUP", &term)?;
            at.set_super_type(Some(sup))?;
            Ok(())
        }),
        LabelRule::new("EQUALITY", Grammar::Token, |at, value, context| {
            at.equality = matching_rule_slot("EQUALITY", value, context)?;
            Ok(())
        }),
        LabelRule::new("ORDERING", Grammar::Token, |at, value, context| {
            at.ordering = matching_rule_slot("ORDERING", value, context)?;
            Ok(())
        }),
        LabelRule::new("SUBSTR", Grammar::Token, |at, value, context| {
            at.substring = matching_rule_slot("SUBSTR", value, context)?;
            Ok(())
        }),
        LabelRule::new("SYNTAX", Grammar::BoundedTerm, |at, value, context| {
            let (term, bound) = match value {
                ScanValue::Bounded { term, bound } => (term, bound),
                other => (other.into_text(), None),
            };
            at.set_syntax(Some(context.resolve(context.ldap_syntaxes, "SYNTAX", &term)?));
            at.set_min_upper_bound(bound);
            Ok(())
        }),
        LabelRule::new("SINGLE-VALUE", Grammar::Bare, |at, _, _| {
            attribute_flag(at, Flags::SINGLE_VALUE)
        }),
        LabelRule::new("COLLECTIVE", Grammar::Bare, |at, _, _| {
            attribute_flag(at, Flags::COLLECTIVE)
        }),
        LabelRule::new("NO-USER-MODIFICATION", Grammar::Bare, |at, _, _| {
            attribute_flag(at, Flags::NO_USER_MODIFICATION)
        }),
        LabelRule::new("USAGE", Grammar::Token, |at, value, _| {
            let token = value.into_text();
            at.usage = Usage::parse(&token)
                .ok_or_else(|| SchemaError::invalid_value("USAGE", &token, "unknown usage"))?;
            Ok(())
        }),
    ];

    fn set_identifier(&mut self, token: &str, context: &ScanContext<'_>) -> SchemaResult<()> {
        self.oid = context.resolve_oid(token)?;
        Ok(())
    }
}

/// Resolve every term of a list against the attribute type registry.
fn attribute_list(
    label: &str,
    value: ScanValue,
    context: &ScanContext<'_>,
) -> SchemaResult<Vec<AttributeTypeRef>> {
    value
        .into_list()
        .iter()
        .map(|term| context.resolve(context.attribute_types, label, term))
        .collect()
}

fn class_list(
    label: &str,
    value: ScanValue,
    context: &ScanContext<'_>,
) -> SchemaResult<Vec<ObjectClassRef>> {
    value
        .into_list()
        .iter()
        .map(|term| context.resolve(context.object_classes, label, term))
        .collect()
}

impl Scannable for ObjectClass {
    const LABELS: &'static [LabelRule<Self>] = &[
        name(),
        desc(),
        obsolete(),
        LabelRule::new("SUP", Grammar::TermList, |oc, value, context| {
            for class in class_list("SUP", value, context)? {
                oc.add_super_class(class)?;
            }
            Ok(())
        }),
        LabelRule::new("ABSTRACT", Grammar::Bare, |oc: &mut ObjectClass, _, _| {
            oc.kind = Kind::Abstract;
            Ok(())
        })
        .in_slot("KIND"),
        LabelRule::new("STRUCTURAL", Grammar::Bare, |oc: &mut ObjectClass, _, _| {
            oc.kind = Kind::Structural;
            Ok(())
        })
        .in_slot("KIND"),
        LabelRule::new("AUXILIARY", Grammar::Bare, |oc: &mut ObjectClass, _, _| {
            oc.kind = Kind::Auxiliary;
            Ok(())
        })
        .in_slot("KIND"),
        LabelRule::new("MUST", Grammar::TermList, |oc, value, context| {
            for attribute in attribute_list("MUST", value, context)? {
                oc.add_must(attribute);
            }
            Ok(())
        }),
        LabelRule::new("MAY", Grammar::TermList, |oc, value, context| {
            for attribute in attribute_list("MAY", value, context)? {
                oc.add_may(attribute);
            }
            Ok(())
        }),
    ];

    fn set_identifier(&mut self, token: &str, context: &ScanContext<'_>) -> SchemaResult<()> {
        self.oid = context.resolve_oid(token)?;
        Ok(())
    }
}

impl Scannable for MatchingRuleUse {
    const LABELS: &'static [LabelRule<Self>] = &[
        name(),
        desc(),
        obsolete(),
        LabelRule::new("APPLIES", Grammar::TermList, |mru, value, context| {
            for attribute in attribute_list("APPLIES", value, context)? {
                mru.add_applies(attribute);
            }
            Ok(())
        }),
    ];

    fn set_identifier(&mut self, token: &str, context: &ScanContext<'_>) -> SchemaResult<()> {
        self.oid = context.resolve_oid(token)?;
        Ok(())
    }
}

impl Scannable for DitContentRule {
    const LABELS: &'static [LabelRule<Self>] = &[
        name(),
        desc(),
        obsolete(),
        LabelRule::new("AUX", Grammar::TermList, |rule, value, context| {
            for class in class_list("AUX", value, context)? {
                rule.add_aux(class);
            }
            Ok(())
        }),
        LabelRule::new("MUST", Grammar::TermList, |rule, value, context| {
            for attribute in attribute_list("MUST", value, context)? {
                rule.add_must(attribute);
            }
            Ok(())
        }),
        LabelRule::new("MAY", Grammar::TermList, |rule, value, context| {
            for attribute in attribute_list("MAY", value, context)? {
                rule.add_may(attribute);
            }
            Ok(())
        }),
        LabelRule::new("NOT", Grammar::TermList, |rule, value, context| {
            for attribute in attribute_list("NOT", value, context)? {
                rule.add_not(attribute);
            }
            Ok(())
        }),
    ];

    /// The identifier is the OID of the governed structural class, which
    /// must already be registered.
    fn set_identifier(&mut self, token: &str, context: &ScanContext<'_>) -> SchemaResult<()> {
        let oid = context.resolve_oid(token)?;
        let class = context.resolve(context.object_classes, "OID", oid.as_str())?;
        self.oid = oid;
        self.structural = Some(class);
        Ok(())
    }
}

impl Scannable for NameForm {
    const LABELS: &'static [LabelRule<Self>] = &[
        name(),
        desc(),
        obsolete(),
        LabelRule::new("OC", Grammar::Token, |form, value, context| {
            let term = value.into_text();
            form.oc = Some(context.resolve(context.object_classes, "OC", &term)?);
            Ok(())
        }),
        LabelRule::new("MUST", Grammar::TermList, |form, value, context| {
            for attribute in attribute_list("MUST", value, context)? {
                form.add_must(attribute);
            }
            Ok(())
        }),
        LabelRule::new("MAY", Grammar::TermList, |form, value, context| {
            for attribute in attribute_list("MAY", value, context)? {
                form.add_may(attribute);
            }
            Ok(())
        }),
    ];

    fn set_identifier(&mut self, token: &str, context: &ScanContext<'_>) -> SchemaResult<()> {
        self.oid = context.resolve_oid(token)?;
        Ok(())
    }
}

impl Scannable for DitStructureRule {
    const LABELS: &'static [LabelRule<Self>] = &[
        name(),
        desc(),
        obsolete(),
        LabelRule::new("FORM", Grammar::Token, |rule, value, context| {
            let term = value.into_text();
            rule.form = Some(context.resolve(context.name_forms, "FORM", &term)?);
            Ok(())
        }),
        LabelRule::new("SUP", Grammar::TermList, |rule, value, context| {
            for term in value.into_list() {
                let superior = context.resolve(context.dit_structure_rules, "SUP", &term)?;
                rule.add_superior_rule(superior)?;
            }
            Ok(())
        }),
    ];

    fn set_identifier(&mut self, token: &str, _: &ScanContext<'_>) -> SchemaResult<()> {
        self.rule_id = Some(RuleId::parse(token)?);
        Ok(())
    }
}
