//! Matching rule use derivation over populated registries.

use crate::common::fixtures::nis_schema;
use dirschema::{Definition, Unmarshal};

#[test]
fn test_refresh_picks_up_new_attribute_types() {
    let schema = nis_schema();
    assert!(schema.matching_rule_uses().by_key("2.5.13.14").is_none());

    // uidNumber and gidNumber each add integerMatch and integerOrderingMatch;
    // gecos, homeDirectory and loginShell add their IA5 rules.
    let added = schema.refresh_matching_rule_uses();
    assert_eq!(added, 8);

    let integer = schema.matching_rule_uses().by_key("2.5.13.14").unwrap();
    assert_eq!(
        integer.read().unmarshal().unwrap(),
        "( 2.5.13.14 NAME 'integerMatch' APPLIES ( uidNumber $ gidNumber ) )"
    );
}

#[test]
fn test_refresh_twice_equals_refresh_once() {
    let schema = nis_schema();
    schema.refresh_matching_rule_uses();
    let once = schema.matching_rule_uses().unmarshal_all().unwrap();

    assert_eq!(schema.refresh_matching_rule_uses(), 0);
    assert_eq!(schema.matching_rule_uses().unmarshal_all().unwrap(), once);
}

#[test]
fn test_refresh_keeps_existing_entries() {
    let schema = nis_schema();
    schema
        .register(
            "matchingRuleUse",
            "( 2.5.13.5 NAME 'caseExactUse' DESC 'Kept' APPLIES cn )",
        )
        .unwrap();

    schema.refresh_matching_rule_uses();
    let exact = schema.matching_rule_uses().by_key("2.5.13.5").unwrap();
    let exact = exact.read();
    assert_eq!(exact.description().as_str(), "Kept");
    assert_eq!(exact.applies().len(), 1);
}
