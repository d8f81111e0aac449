//! Definitions as published in RFC 4512, RFC 4517, RFC 2307 and RFC 4523.

use crate::assert_validation_error;
use crate::common::fixtures::{CASE_IGNORE_MATCH, default_schema, nis_schema};
use dirschema::definitions::{AttributeType, Kind, LdapSyntax, MatchingRule, ObjectClass};
use dirschema::error::ValidationError;
use dirschema::manifest::Manifest;
use dirschema::{Definition, Marshal, ScanContext, Unmarshal};

#[test]
fn test_case_ignore_match_against_bare_registries() {
    let syntaxes: Manifest<LdapSyntax> = Manifest::new();
    syntaxes.set(
        LdapSyntax::marshal(
            "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' X-ORIGIN 'RFC4517' )",
            &ScanContext::new(),
        )
        .unwrap(),
    );

    let rule = MatchingRule::marshal(
        CASE_IGNORE_MATCH,
        &ScanContext::new().with_ldap_syntaxes(&syntaxes),
    )
    .unwrap();
    assert_eq!(rule.unmarshal().unwrap(), CASE_IGNORE_MATCH);
}

#[test]
fn test_posix_account_inheritance() {
    let schema = nis_schema();
    let account = schema.object_classes().get("posixAccount", None).unwrap();
    let account = account.read();

    assert_eq!(account.kind(), Kind::Auxiliary);
    let must: Vec<String> = account
        .all_must()
        .iter()
        .map(|at| at.reference_term())
        .collect();
    assert_eq!(
        must,
        ["cn", "uid", "uidNumber", "gidNumber", "homeDirectory", "objectClass"]
    );
}

#[test]
fn test_collective_attribute() {
    let schema = default_schema();
    let at: AttributeType = schema
        .marshal("( 2.5.4.7.1 NAME 'c-l' SUP l COLLECTIVE X-ORIGIN 'RFC3671' )")
        .unwrap();
    assert!(at.is_collective());
    assert_eq!(
        at.unmarshal().unwrap(),
        "( 2.5.4.7.1 NAME 'c-l' SUP l COLLECTIVE X-ORIGIN 'RFC3671' )"
    );

    assert_validation_error!(
        schema.marshal::<AttributeType>("( 2.5.4.7.1 NAME 'c-l' SUP l COLLECTIVE SINGLE-VALUE )"),
        ValidationError::CollectiveSingleValue { .. }
    );
}

#[test]
fn test_certificate_schema_with_binary_syntax() {
    let schema = default_schema();
    schema
        .register(
            "ldapSyntaxes",
            "( 1.3.6.1.4.1.1466.115.121.1.8 DESC 'X.509 Certificate' X-NOT-HUMAN-READABLE 'TRUE' )",
        )
        .unwrap();
    schema
        .register(
            "matchingRules",
            "( 2.5.13.34 NAME 'certificateExactMatch' DESC 'X.509 Certificate Exact Match' SYNTAX 1.3.6.1.4.1.1466.115.121.1.8 )",
        )
        .unwrap();
    schema
        .register(
            "attributeTypes",
            "( 2.5.4.36 NAME 'userCertificate' DESC 'X.509 user certificate' EQUALITY certificateExactMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.8 )",
        )
        .unwrap();

    let certificate = schema.attribute_types().get("userCertificate", None).unwrap();
    let syntax = certificate.read().effective_syntax().unwrap();
    assert!(!syntax.read().is_human_readable());

    let class: ObjectClass = schema
        .marshal("( 2.5.6.21 NAME 'pkiUser' DESC 'X.509 PKI User' SUP top AUXILIARY MAY userCertificate )")
        .unwrap();
    assert!(class.may()[0].ptr_eq(&certificate));
}

#[test]
fn test_obsolete_definitions_still_resolve() {
    let schema = default_schema();
    schema
        .register(
            "attributeTypes",
            "( 1.3.6.1.4.1.56521.1.20 NAME 'oldName' OBSOLETE SUP name )",
        )
        .unwrap();

    let class: ObjectClass = schema
        .marshal("( 1.3.6.1.4.1.56521.2.20 NAME 'legacy' SUP top AUXILIARY MAY oldName )")
        .unwrap();
    assert!(class.may()[0].read().is_obsolete());
}
