//! Scanner tests through the public `Marshal` API.

use crate::common::fixtures::{CASE_IGNORE_MATCH, default_schema};
use crate::{assert_schema_error, assert_validation_error};
use dirschema::definitions::{
    AttributeType, Definition, Kind, LdapSyntax, MatchingRule, ObjectClass, Usage,
};
use dirschema::error::ValidationError;
use dirschema::manifest::Manifest;
use dirschema::{Marshal, ScanContext, SchemaError, Unmarshal};
use proptest::prelude::*;

#[test]
fn test_whitespace_is_normalized() {
    let schema = default_schema();
    let messy = "  (   2.5.13.2\n\tNAME 'caseIgnoreMatch'\r\n   SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 \\n X-ORIGIN 'RFC4517'   )  ";
    let rule: MatchingRule = schema.marshal(messy).unwrap();
    assert_eq!(rule.unmarshal().unwrap(), CASE_IGNORE_MATCH);
}

#[test]
fn test_spacing_inside_quotes_kept() {
    let schema = default_schema();
    let syntax: LdapSyntax = schema
        .marshal("( 1.3.6.1.4.1.56521.4.2 DESC 'two  spaces' )")
        .unwrap();
    assert_eq!(syntax.description().as_str(), "two  spaces");
}

#[test]
fn test_framing_errors() {
    let context = ScanContext::new();
    assert_schema_error!(LdapSyntax::marshal("", &context), SchemaError::EmptyInput);
    assert_schema_error!(
        LdapSyntax::marshal("1.2.3 DESC 'x'", &context),
        SchemaError::InvalidFraming { .. }
    );
    assert_schema_error!(
        LdapSyntax::marshal("(1.2.3 DESC 'x' )", &context),
        SchemaError::InvalidFraming { .. }
    );
    assert_schema_error!(
        LdapSyntax::marshal("( )", &context),
        SchemaError::InvalidFraming { .. }
    );
}

#[test]
fn test_label_errors() {
    let schema = default_schema();
    assert_schema_error!(
        schema.marshal::<MatchingRule>("( 2.5.13.99 NAME 'x' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 USAGE dSAOperation )"),
        SchemaError::InvalidLabel { .. }
    );
    assert_schema_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'x' SUP name USAGE nobodyOperation )"),
        SchemaError::InvalidValue { .. }
    );
    assert_schema_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'x' SUP name SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{big} )"),
        SchemaError::InvalidValue { .. }
    );
    assert_schema_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'x' NAME 'y' SUP name )"),
        SchemaError::InvalidValue { .. }
    );
    assert_schema_error!(
        schema.marshal::<ObjectClass>("( 2.5.6.99 NAME 'x' STRUCTURAL AUXILIARY )"),
        SchemaError::InvalidValue { .. }
    );
}

#[test]
fn test_invalid_identifiers() {
    let schema = default_schema();
    assert_schema_error!(
        schema.marshal::<LdapSyntax>("( 1.02.3 DESC 'x' )"),
        SchemaError::InvalidOid { .. }
    );
    assert_schema_error!(
        schema.marshal::<LdapSyntax>("( unknownArc.1 DESC 'x' )"),
        SchemaError::UnresolvedAlias { .. }
    );
    assert_schema_error!(
        LdapSyntax::marshal("( someAlias.1 DESC 'x' )", &ScanContext::new()),
        SchemaError::MissingAliasRegistry { .. }
    );
}

#[test]
fn test_names_validated_against_config() {
    let schema = dirschema::SchemaBuilder::new()
        .with_max_name_len(8)
        .with_defaults()
        .build()
        .unwrap();
    assert!(schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'short' SUP name )").is_ok());
    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'muchTooLong' SUP name )"),
        ValidationError::InvalidName { .. }
    );
    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'under_score' SUP name )"),
        ValidationError::InvalidName { .. }
    );
}

#[test]
fn test_empty_names_toggle() {
    let strict = dirschema::SchemaBuilder::new()
        .with_empty_names(false)
        .with_defaults()
        .build()
        .unwrap();
    assert_validation_error!(
        strict.marshal::<AttributeType>("( 2.5.4.99 SUP name )"),
        ValidationError::InvalidName { .. }
    );
    assert!(default_schema().marshal::<AttributeType>("( 2.5.4.99 SUP name )").is_ok());
}

#[test]
fn test_attribute_type_fields() {
    let schema = default_schema();
    let at: AttributeType = schema
        .marshal(
            "( 2.5.18.99 NAME 'auditStamp' EQUALITY generalizedTimeMatch ORDERING generalizedTimeOrderingMatch \
             SYNTAX 1.3.6.1.4.1.1466.115.121.1.24{64} SINGLE-VALUE NO-USER-MODIFICATION USAGE dSAOperation )",
        )
        .unwrap();

    assert!(at.is_single_value());
    assert!(at.is_no_user_modification());
    assert!(at.is_operational());
    assert_eq!(at.usage(), Usage::DsaOperation);
    assert_eq!(at.min_upper_bound(), Some(64));
    assert_eq!(
        at.ordering().map(|r| r.reference_term()).as_deref(),
        Some("generalizedTimeOrderingMatch")
    );
}

#[test]
fn test_attribute_type_rules() {
    let schema = default_schema();
    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'x' SUP name SINGLE-VALUE COLLECTIVE )"),
        ValidationError::CollectiveSingleValue { .. }
    );
    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'x' SUP name COLLECTIVE USAGE directoryOperation )"),
        ValidationError::CollectiveOperational { .. }
    );
    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'x' SUP name NO-USER-MODIFICATION )"),
        ValidationError::UserModifiableUsage { .. }
    );
    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'x' EQUALITY caseIgnoreMatch )"),
        ValidationError::MissingSyntax { .. }
    );
    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.99 NAME 'x' SUBSTR caseIgnoreMatch SUP name )"),
        ValidationError::MatchingRuleKindMismatch { .. }
    );
    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.41 NAME 'x' SUP name )"),
        ValidationError::SelfSuperior { .. }
    );
}

#[test]
fn test_object_class_rules() {
    let schema = default_schema();
    let class: ObjectClass = schema
        .marshal("( 2.5.6.99 NAME 'device' SUP top MUST cn MAY ( description $ l ) )")
        .unwrap();
    assert_eq!(class.kind(), Kind::Structural);
    assert_eq!(class.must().len(), 1);
    assert_eq!(class.may().len(), 2);

    assert_validation_error!(
        schema.marshal::<ObjectClass>("( 2.5.6.99 NAME 'x' SUP person ABSTRACT )"),
        ValidationError::SuperiorKindConflict { .. }
    );
    assert_validation_error!(
        schema.marshal::<ObjectClass>("( 2.5.6.99 NAME 'x' SUP person AUXILIARY )"),
        ValidationError::SuperiorKindConflict { .. }
    );
    assert_validation_error!(
        schema.marshal::<ObjectClass>("( 2.5.6.99 NAME 'x' SUP dcObject STRUCTURAL )"),
        ValidationError::SuperiorKindConflict { .. }
    );
    assert_validation_error!(
        schema.marshal::<ObjectClass>("( 2.5.6.6 NAME 'x' SUP person )"),
        ValidationError::SelfSuperior { .. }
    );
}

#[test]
fn test_syntax_lookup_by_description() {
    let syntaxes: Manifest<LdapSyntax> = Manifest::new();
    syntaxes.set(
        LdapSyntax::marshal(
            "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )",
            &ScanContext::new(),
        )
        .unwrap(),
    );
    let context = ScanContext::new().with_ldap_syntaxes(&syntaxes);

    for term in ["DirectoryString", "'directoryStringSyntax'", "Directory"] {
        let raw = format!("( 2.5.13.2 NAME 'caseIgnoreMatch' SYNTAX {} )", term);
        let rule = MatchingRule::marshal(&raw, &context);
        assert!(rule.is_ok(), "SYNTAX term '{}' did not resolve", term);
    }
}

#[test]
fn test_human_readable_extension() {
    let context = ScanContext::new();
    let binary = LdapSyntax::marshal(
        "( 1.3.6.1.4.1.1466.115.121.1.5 DESC 'Binary' X-NOT-HUMAN-READABLE 'TRUE' )",
        &context,
    )
    .unwrap();
    assert!(!binary.is_human_readable());

    let text = LdapSyntax::marshal("( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )", &context)
        .unwrap();
    assert!(text.is_human_readable());
}

fn padding() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(" "), Just("\t"), Just("\n"), Just("\\n")], 1..4)
        .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_padding_between_tokens_is_ignored(pads in proptest::collection::vec(padding(), 7)) {
        let schema = default_schema();
        let tokens = [
            "(", "2.5.13.2", "NAME 'caseIgnoreMatch'", "SYNTAX",
            "1.3.6.1.4.1.1466.115.121.1.15", "X-ORIGIN", "'RFC4517'", ")",
        ];
        let mut raw = String::new();
        for (token, pad) in tokens.iter().zip(pads.iter().chain(std::iter::once(&String::new()))) {
            raw.push_str(token);
            raw.push_str(pad);
        }

        let rule: MatchingRule = schema.marshal(&raw).unwrap();
        prop_assert_eq!(rule.unmarshal().unwrap(), CASE_IGNORE_MATCH);
    }

    #[test]
    fn prop_description_survives_round_trip(text in "[!-~][ -~]{0,62}[!-~]") {
        let schema = default_schema();
        let mut syntax = LdapSyntax::default();
        let raw = format!(
            "( 1.3.6.1.4.1.56521.4.3 DESC '{}' )",
            dirschema::value_objects::escape_qdstring(&text)
        );
        dirschema::marshal(&raw, &mut syntax, &schema.context()).unwrap();
        prop_assert_eq!(syntax.description().as_str(), text.as_str());

        let rescanned: LdapSyntax = schema.marshal(&syntax.unmarshal().unwrap()).unwrap();
        prop_assert_eq!(rescanned.description().as_str(), text.as_str());
    }
}
