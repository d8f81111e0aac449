//! Registry and macro registry tests.

use crate::assert_schema_error;
use crate::common::fixtures::{NIS_SCHEMA_OID, default_schema};
use dirschema::definitions::{AttributeType, LdapSyntax, ObjectClass};
use dirschema::manifest::{Macros, Manifest};
use dirschema::value_objects::{Description, Oid};
use dirschema::{Definition, SchemaError, Shared};

fn syntax(oid: &str, description: &str) -> LdapSyntax {
    LdapSyntax::new(Oid::new(oid).unwrap(), Description::new(description).unwrap())
}

#[test]
fn test_set_is_unique_by_key() {
    let syntaxes: Manifest<LdapSyntax> = Manifest::new();
    assert!(syntaxes.set(syntax("1.3.6.1.4.1.1466.115.121.1.15", "Directory String")));
    assert!(!syntaxes.set(syntax("1.3.6.1.4.1.1466.115.121.1.15", "Something Else")));

    assert_eq!(syntaxes.len(), 1);
    let kept = syntaxes.by_key("1.3.6.1.4.1.1466.115.121.1.15").unwrap();
    assert_eq!(kept.read().description().as_str(), "Directory String");
}

#[test]
fn test_names_are_unique_across_members() {
    let types: Manifest<AttributeType> = Manifest::new();
    let named = |oid: &str, names: &[&str]| {
        let mut at = AttributeType::new(Oid::new(oid).unwrap());
        for name in names {
            at.name_mut().unwrap().push(*name).unwrap();
        }
        at
    };

    assert!(types.insert(named("1.9.1", &["foo"])).unwrap());
    assert_schema_error!(
        types.insert(named("1.9.2", &["bar", "FOO"])),
        SchemaError::DuplicateName { .. }
    );
    assert!(!types.set(named("1.9.2", &["foo"])));
    assert!(types.set(named("1.9.2", &["bar"])));

    assert_eq!(types.len(), 2);
    assert_eq!(types.get("foo", None).unwrap().key(), "1.9.1");
}

#[test]
fn test_zero_definition_rejected() {
    let syntaxes: Manifest<LdapSyntax> = Manifest::new();
    assert!(!syntaxes.set(LdapSyntax::default()));
    assert!(syntaxes.is_empty());
}

#[test]
fn test_insertion_order() {
    let syntaxes: Manifest<LdapSyntax> = Manifest::new();
    let inserted = syntaxes.extend([
        syntax("1.3.6.1.4.1.1466.115.121.1.27", "INTEGER"),
        syntax("1.3.6.1.4.1.1466.115.121.1.15", "Directory String"),
        syntax("1.3.6.1.4.1.1466.115.121.1.7", "Boolean"),
        syntax("1.3.6.1.4.1.1466.115.121.1.15", "Duplicate"),
    ]);
    assert_eq!(inserted, 3);

    assert_eq!(
        syntaxes.keys(),
        [
            "1.3.6.1.4.1.1466.115.121.1.27",
            "1.3.6.1.4.1.1466.115.121.1.15",
            "1.3.6.1.4.1.1466.115.121.1.7",
        ]
    );
    assert_eq!(syntaxes.index(2).unwrap().key(), "1.3.6.1.4.1.1466.115.121.1.7");
    assert!(syntaxes.index(3).is_none());
    assert_eq!(syntaxes.sequence_of("1.3.6.1.4.1.1466.115.121.1.15"), Some(1));
}

#[test]
fn test_lookup_terms() {
    let schema = default_schema();
    let classes = schema.object_classes();

    let by_oid = classes.get("2.5.6.6", None).unwrap();
    let by_name = classes.get("PERSON", None).unwrap();
    assert!(by_oid.ptr_eq(&by_name));
    assert!(classes.get("nobody", None).is_none());

    schema
        .macros()
        .set("x500Classes", Oid::new("2.5.6").unwrap())
        .unwrap();
    let by_alias = classes.get("x500Classes.6", Some(schema.macros())).unwrap();
    assert!(by_alias.ptr_eq(&by_oid));
    assert!(!classes.exists("x500Classes.6", None));
}

#[test]
fn test_shared_mutation_visible_to_holders() {
    let schema = default_schema();
    let person = schema.object_classes().get("person", None).unwrap();
    let holder = schema.object_classes().get("organizationalPerson", None).unwrap();

    person.write().set_obsolete(true);
    let superior = holder.read().super_classes()[0].clone();
    assert!(superior.read().is_obsolete());
    assert!(superior.ptr_eq(&person));
}

#[test]
fn test_equals_compares_members() {
    let a = default_schema();
    let b = default_schema();
    assert!(a.object_classes().equals(b.object_classes()));

    b.object_classes()
        .get("person", None)
        .unwrap()
        .write()
        .set_obsolete(true);
    assert!(!a.object_classes().equals(b.object_classes()));

    let empty: Manifest<ObjectClass> = Manifest::new();
    assert!(!a.object_classes().equals(&empty));
    assert!(empty.equals(&Manifest::new()));
}

#[test]
fn test_snapshot_is_detached_from_registry() {
    let syntaxes: Manifest<LdapSyntax> = Manifest::new();
    syntaxes.set(syntax("1.3.6.1.4.1.1466.115.121.1.7", "Boolean"));
    let snapshot: Vec<Shared<LdapSyntax>> = syntaxes.snapshot();

    syntaxes.set(syntax("1.3.6.1.4.1.1466.115.121.1.27", "INTEGER"));
    assert_eq!(snapshot.len(), 1);
    assert_eq!(syntaxes.iter().count(), 2);
}

#[test]
fn test_macro_resolution() {
    let macros = Macros::new();
    assert!(macros.set("nisSchema", Oid::new(NIS_SCHEMA_OID).unwrap()).unwrap());
    assert!(!macros.set("NISSCHEMA", Oid::new("1.2.3").unwrap()).unwrap());

    assert_eq!(macros.resolve("nisSchema").unwrap().as_str(), "1.3.6.1.1.1");
    assert_eq!(macros.resolve("nisSchema.1.1").unwrap().as_str(), "1.3.6.1.1.1.1.1");
    assert_eq!(macros.resolve("nisSchema:2.0").unwrap().as_str(), "1.3.6.1.1.1.2.0");
    assert_eq!(macros.resolve("2.5.4.3").unwrap().as_str(), "2.5.4.3");

    assert_schema_error!(macros.resolve("unknownSchema.1"), SchemaError::UnresolvedAlias { .. });
    assert_schema_error!(macros.resolve("nisSchema.x"), SchemaError::InvalidOid { .. });
    assert!(macros.set("has space", Oid::new("1.2.3").unwrap()).is_err());
}
