//! Scan, render and rescan for every definition kind.
//!
//! Each case goes through the public `Schema::marshal` entry point twice and
//! checks the second scan is equal to the first.

use crate::assert_round_trip;
use crate::common::{fixtures::nis_schema, init_logging};
use dirschema::definitions::{
    AttributeType, DitContentRule, DitStructureRule, LdapSyntax, MatchingRule, MatchingRuleUse,
    NameForm, ObjectClass,
};
use dirschema::value_objects::{Description, Flags, Oid};
use dirschema::{Definition, Schema, Unmarshal, Validate};
use proptest::prelude::*;

fn schema_with_rules() -> Schema {
    let schema = nis_schema();
    schema
        .register(
            "nameForms",
            "( 1.3.6.1.4.1.56521.3.1 NAME 'groupNameForm' OC posixGroup MUST cn )",
        )
        .unwrap();
    schema
        .register("dITStructureRules", "( 10 NAME 'groupRule' FORM groupNameForm )")
        .unwrap();
    schema
}

#[test]
fn test_ldap_syntax() {
    init_logging();
    let schema = Schema::with_defaults();
    let rendered = assert_round_trip!(
        LdapSyntax,
        schema,
        "( 1.3.6.1.4.1.1466.115.121.1.5 DESC 'Binary' OBSOLETE X-NOT-HUMAN-READABLE 'TRUE' )"
    );
    assert_eq!(
        rendered,
        "( 1.3.6.1.4.1.1466.115.121.1.5 DESC 'Binary' OBSOLETE X-NOT-HUMAN-READABLE 'TRUE' )"
    );
}

#[test]
fn test_matching_rule() {
    let schema = Schema::with_defaults();
    assert_round_trip!(
        MatchingRule,
        schema,
        "( 2.5.13.11 NAME 'caseIgnoreListMatch' DESC 'Postal address lists' OBSOLETE SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 X-ORIGIN ( 'RFC4517' 'X.520' ) )"
    );
}

#[test]
fn test_attribute_type() {
    let schema = nis_schema();
    let rendered = assert_round_trip!(
        AttributeType,
        schema,
        "( nisSchema.1.26 NAME ( 'nisMapName' 'mapName' ) DESC 'Name of a map' SUP name SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{1024} )"
    );
    assert!(rendered.starts_with("( 1.3.6.1.1.1.1.26 NAME ( 'nisMapName' 'mapName' )"));
}

#[test]
fn test_object_class() {
    let schema = nis_schema();
    assert_round_trip!(
        ObjectClass,
        schema,
        "( nisSchema.2.1 NAME 'shadowAccount' DESC 'Additional attributes for shadow passwords' SUP top AUXILIARY MUST uid MAY ( userPassword $ description ) )"
    );
}

#[test]
fn test_matching_rule_use() {
    let schema = nis_schema();
    let rendered = assert_round_trip!(
        MatchingRuleUse,
        schema,
        "( 2.5.13.14 NAME 'integerMatchUse' APPLIES ( uidNumber $ gidNumber ) )"
    );
    assert_eq!(
        rendered,
        "( 2.5.13.14 NAME 'integerMatchUse' APPLIES ( uidNumber $ gidNumber ) )"
    );
}

#[test]
fn test_dit_content_rule() {
    let schema = nis_schema();
    assert_round_trip!(
        DitContentRule,
        schema,
        "( 2.5.6.6 NAME 'personContentRule' AUX ( posixAccount $ uidObject ) MUST uid MAY loginShell NOT ( telephoneNumber $ seeAlso ) )"
    );
}

#[test]
fn test_name_form() {
    let schema = nis_schema();
    assert_round_trip!(
        NameForm,
        schema,
        "( 1.3.6.1.4.1.56521.3.2 NAME 'personNameForm' OC person MUST cn MAY ( sn $ uid ) )"
    );
}

#[test]
fn test_dit_structure_rule() {
    let schema = schema_with_rules();
    let rendered = assert_round_trip!(
        DitStructureRule,
        schema,
        "( 11 NAME 'subGroupRule' DESC 'Groups under groups' FORM groupNameForm SUP ( 10 ) X-ORIGIN 'example' )"
    );
    assert_eq!(
        rendered,
        "( 11 NAME 'subGroupRule' DESC 'Groups under groups' FORM groupNameForm SUP groupRule X-ORIGIN 'example' )"
    );
}

#[test]
fn test_dollar_delimited_lists() {
    let schema = Schema::with_defaults();
    let rendered = assert_round_trip!(
        AttributeType,
        schema,
        "( 1.3.6.1.4.1.56521.1.30 NAME ( 'nick' $ 'alias' ) SUP name X-ORIGIN ( 'local' $ 'draft' ) )"
    );
    assert_eq!(
        rendered,
        "( 1.3.6.1.4.1.56521.1.30 NAME ( 'nick' 'alias' ) SUP name X-ORIGIN ( 'local' 'draft' ) )"
    );
}

fn descr() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_built_attribute_type_round_trips(
        names in proptest::collection::btree_set(descr(), 1..4),
        description in proptest::option::of("[!-~][ -~]{0,40}"),
        extensions in proptest::collection::btree_map(
            "X-[A-Z][A-Z0-9_-]{0,10}",
            proptest::collection::vec("[ -~]{0,20}", 1..4),
            0..3,
        ),
        bound in proptest::option::of(1u32..100_000),
        single_value in any::<bool>(),
        obsolete in any::<bool>(),
        arc in 0u32..1000,
    ) {
        let schema = Schema::with_defaults();
        let mut at = AttributeType::new(Oid::new(format!("1.3.6.1.4.1.56521.7.{}", arc)).unwrap());
        for name in &names {
            at.name_mut().unwrap().push(name.as_str()).unwrap();
        }
        if let Some(text) = &description {
            at.set_description(Description::new(text.as_str()).unwrap());
        }
        for (label, values) in &extensions {
            at.extensions_mut().set(label, values.clone()).unwrap();
        }
        at.set_syntax(schema.ldap_syntaxes().get("1.3.6.1.4.1.1466.115.121.1.15", None));
        at.set_min_upper_bound(bound);
        at.set_flag(Flags::SINGLE_VALUE, single_value).unwrap();
        at.set_obsolete(obsolete);
        at.validate().unwrap();

        let rendered = at.unmarshal().unwrap();
        let rescanned: AttributeType = schema.marshal(&rendered).unwrap();
        prop_assert_eq!(&rescanned, &at);
        prop_assert_eq!(rescanned.description().as_str(), at.description().as_str());
        prop_assert_eq!(rescanned.unmarshal().unwrap(), rendered);
    }
}
