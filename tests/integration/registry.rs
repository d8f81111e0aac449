//! Registration through the schema bundle.

use crate::common::fixtures::{default_schema, nis_schema};
use crate::{assert_error_message_contains, assert_schema_error, assert_validation_error};
use dirschema::definitions::{AttributeType, ObjectClass};
use dirschema::error::ValidationError;
use dirschema::{Definition, SchemaError, Unmarshal};
use std::sync::Arc;
use std::thread;

#[test]
fn test_second_set_is_noop() {
    let schema = nis_schema();
    let before = schema.attribute_types().len();
    let original = schema.attribute_types().get("uidNumber", None).unwrap();

    let again = schema
        .marshal_and_set::<AttributeType>(
            "( nisSchema.1.0 NAME 'renamed' SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
        )
        .unwrap();

    assert!(again.ptr_eq(&original));
    assert_eq!(schema.attribute_types().len(), before);
    assert!(!schema.attribute_types().exists("renamed", None));
}

#[test]
fn test_unregistered_equality_leaves_registry_unchanged() {
    let schema = default_schema();
    let keys = schema.attribute_types().keys();

    let result = schema.marshal_and_set::<AttributeType>(
        "( 1.3.6.1.4.1.56521.1.9 NAME 'shoeSize' EQUALITY shoeSizeMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
    );
    assert_error_message_contains!(result, "shoeSizeMatch");
    assert_eq!(schema.attribute_types().keys(), keys);
}

#[test]
fn test_failed_validation_leaves_registry_unchanged() {
    let schema = default_schema();
    let before = schema.object_classes().len();

    assert_validation_error!(
        schema.marshal_and_set::<ObjectClass>(
            "( 1.3.6.1.4.1.56521.2.9 NAME 'broken' SUP person AUXILIARY MUST cn )"
        ),
        ValidationError::SuperiorKindConflict { .. }
    );
    assert_eq!(schema.object_classes().len(), before);
}

#[test]
fn test_register_rejects_unknown_attribute() {
    let schema = default_schema();
    assert_schema_error!(
        schema.register("ditStructure", "( 1 FORM x )"),
        SchemaError::UnsupportedTarget { .. }
    );
}

#[test]
fn test_references_point_at_canonical_instances() {
    let schema = nis_schema();
    let account = schema.object_classes().get("posixAccount", None).unwrap();
    let uid_number = schema.attribute_types().get("uidNumber", None).unwrap();

    let listed = account.read().must()[2].clone();
    assert!(listed.ptr_eq(&uid_number));

    uid_number.write().set_obsolete(true);
    assert!(account.read().must()[2].read().is_obsolete());
}

#[test]
fn test_duplicate_name_refused() {
    let schema = default_schema();
    schema
        .register("attributeTypes", "( 1.9.1 NAME 'foo' SUP name )")
        .unwrap();

    assert_schema_error!(
        schema.marshal_and_set::<AttributeType>("( 1.9.2 NAME ( 'other' 'Foo' ) SUP name )"),
        SchemaError::DuplicateName { .. }
    );
    assert!(schema.attribute_types().by_key("1.9.2").is_none());

    // References by name stay unambiguous after a rescan.
    schema
        .register("attributeTypes", "( 1.9.2 NAME 'bar' SUP name )")
        .unwrap();
    let child = schema
        .marshal_and_set::<AttributeType>("( 1.9.3 NAME 'baz' SUP 1.9.2 )")
        .unwrap();
    let rendered = child.read().unmarshal().unwrap();
    assert_eq!(rendered, "( 1.9.3 NAME 'baz' SUP bar )");

    let rescanned: AttributeType = schema.marshal(&rendered).unwrap();
    assert_eq!(rescanned.super_type().unwrap().key(), "1.9.2");
}

#[test]
fn test_self_superior_through_registered_handle() {
    let schema = default_schema();

    let cn = schema.attribute_types().get("cn", None).unwrap();
    assert_validation_error!(
        cn.write().set_super_type(Some(cn.clone())).map_err(SchemaError::from),
        ValidationError::SelfSuperior { .. }
    );
    assert_eq!(cn.read().super_type().unwrap().key(), "2.5.4.41");

    let person = schema.object_classes().get("person", None).unwrap();
    assert_validation_error!(
        person.write().add_super_class(person.clone()).map_err(SchemaError::from),
        ValidationError::SelfSuperior { .. }
    );
    assert_eq!(person.read().super_classes().len(), 1);
}

#[test]
fn test_concurrent_registration() {
    let schema = Arc::new(default_schema());
    let before = schema.attribute_types().len();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                for n in 0..10 {
                    // Workers 0-3 and 4-7 race for the same keys.
                    let raw = format!(
                        "( 1.3.6.1.4.1.56521.9.{}.{} NAME 'attr{}x{}' SUP name )",
                        worker % 4,
                        n,
                        worker % 4,
                        n
                    );
                    schema.marshal_and_set::<AttributeType>(&raw).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(schema.attribute_types().len(), before + 40);
}
