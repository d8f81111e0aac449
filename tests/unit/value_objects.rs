//! Identifier and value type tests.

use dirschema::value_objects::{
    Description, Extensions, Flags, Name, Oid, RuleId, escape_qdstring, unescape_qdstring,
};
use proptest::prelude::*;

#[test]
fn test_oid_forms() {
    assert!(Oid::new("2.5.4.3").is_ok());
    assert!(Oid::new("0.9.2342.19200300.100.1.1").is_ok());
    assert!(Oid::new("2.5.04").is_err());
    assert!(Oid::new("2..5").is_err());
    assert!(Oid::new("cn").is_err());
    assert!(Oid::new("").is_err());

    let base = Oid::new("1.3.6.1.1.1").unwrap();
    let child = base.child("1.1").unwrap();
    assert_eq!(child.as_str(), "1.3.6.1.1.1.1.1");
    assert!(child.is_descendant_of(&base));
    assert!(!base.is_descendant_of(&child));
}

#[test]
fn test_rule_id_parse() {
    assert_eq!(RuleId::parse("42").unwrap().value(), 42);
    assert!(RuleId::parse("-1").is_err());
    assert!(RuleId::parse("one").is_err());
}

#[test]
fn test_name_set_case_insensitive() {
    let mut name = Name::new();
    assert!(name.push("commonName").unwrap());
    assert!(!name.push("COMMONNAME").unwrap());
    assert!(name.push("cn").unwrap());

    assert_eq!(name.len(), 2);
    assert_eq!(name.primary(), Some("commonName"));
    assert!(name.contains("CN"));

    assert!(Name::validate_descr("2cn", 256).is_err());
    assert!(Name::validate_descr("common_name", 256).is_err());
    assert!(Name::validate_descr("x-custom-1", 256).is_ok());
    assert!(Name::validate_descr("abcdef", 5).is_err());
}

#[test]
fn test_description_limits() {
    let description = Description::new("Directory String").unwrap();
    assert!(description.validate(1024).is_ok());
    assert!(description.validate(4).is_err());
    assert!(Description::from_bytes(&[0xff, 0xfe]).is_err());
}

#[test]
fn test_extensions_keep_insertion_order() {
    let mut extensions = Extensions::new();
    extensions.set("X-ORIGIN", ["RFC4519"]).unwrap();
    extensions.set("X-SCHEMA-FILE", ["core.ldif"]).unwrap();
    extensions.push("X-ORIGIN", "user defined").unwrap();

    let labels: Vec<&str> = extensions.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, ["X-ORIGIN", "X-SCHEMA-FILE"]);
    assert_eq!(
        extensions.get("X-ORIGIN").unwrap(),
        ["RFC4519", "user defined"]
    );

    assert!(extensions.set("X-lower", ["x"]).is_err());
    assert!(extensions.set("ORIGIN", ["x"]).is_err());
}

#[test]
fn test_extension_values_reject_control_characters() {
    let mut extensions = Extensions::new();
    assert!(extensions.set("X-ORIGIN", ["a\tb"]).is_err());
    assert!(extensions.push("X-ORIGIN", "a\rb").is_err());
    assert!(extensions.is_empty());

    let decoded: Extensions = serde_json::from_str(r#"{"X-ORIGIN": ["a\tb"]}"#).unwrap();
    assert!(decoded.validate().is_err());
}

#[test]
fn test_flag_tokens() {
    assert_eq!(Flags::OBSOLETE.token(), Some("OBSOLETE"));
    assert_eq!(Flags::COLLECTIVE.token(), Some("COLLECTIVE"));
    assert_eq!(Flags::HUMAN_READABLE.token(), None);
}

#[test]
fn test_escaping() {
    assert_eq!(escape_qdstring("it's a\\b"), "it\\27s a\\5Cb");
    assert_eq!(unescape_qdstring("it\\27s a\\5cb"), "it's a\\b");
    assert_eq!(unescape_qdstring("path\\x"), "path\\x");
}

proptest! {
    #[test]
    fn prop_escape_round_trip(text in "\\PC*") {
        let escaped = escape_qdstring(&text);
        prop_assert!(!escaped.contains('\''));
        prop_assert_eq!(unescape_qdstring(&escaped), text);
    }

    #[test]
    fn prop_child_oid_extends_parent(arcs in proptest::collection::vec(0u32..100_000, 1..6)) {
        let base = Oid::new("1.3.6.1.4.1").unwrap();
        let suffix = arcs.iter().map(u32::to_string).collect::<Vec<_>>().join(".");
        let child = base.child(&suffix).unwrap();
        prop_assert!(child.is_descendant_of(&base));
        prop_assert_eq!(child.arcs().count(), 6 + arcs.len());
    }
}
