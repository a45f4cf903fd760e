//! Field value object tests: construction, hydration, serialization
//! round-trips, and identity-preserving mutation.

use params::{EntityKind, Field, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn accessors_return_constructed_state() {
    let field = Field::new("u-1", "j-1", "size", "integer", 42);

    assert_eq!(field.uuid(), "u-1");
    assert_eq!(field.join_uuid(), "j-1");
    assert_eq!(field.name(), "size");
    assert_eq!(field.kind(), "integer");
    assert_eq!(*field.value(), 42);
    assert!(field.arguments().is_empty());
    assert!(!field.is_null());
}

#[test]
fn composite_key_joins_join_uuid_and_uuid() {
    let field = Field::new("u-1", "j-1", "size", "integer", 42);
    assert_eq!(field.composite_key(), "j-1_u-1");
}

#[test]
fn every_scalar_kind_is_accepted() {
    assert_eq!(*named_field("a", "text").value(), "text");
    assert_eq!(*named_field("b", 7).value(), 7);
    assert_eq!(*named_field("c", 2.5).value(), 2.5);
    assert_eq!(*named_field("d", false).value(), false);
    assert!(named_field("e", Value::Null).is_null());
}

#[test]
fn hydrate_round_trips_exactly() {
    let record = field_record("j-1", "u-1");

    let field = Field::hydrate(record.clone()).unwrap();

    assert_eq!(field.to_value(), record);
    // and once more through hydrate, per the round-trip guarantee
    let again = Field::hydrate(field.to_value()).unwrap();
    assert_eq!(again.to_value(), record);
}

#[test]
fn hydrate_defaults_absent_value_to_null() {
    let field = Field::hydrate(json!({
        "uuid": "u",
        "join_uuid": "j",
        "name": "n",
        "type": "t",
    }))
    .unwrap();

    assert!(field.is_null());
    assert!(field.arguments().is_empty());

    // defaults are serialized back out explicitly
    let record = field.to_value();
    assert_eq!(record["value"], json!(null));
    assert_eq!(record["arguments"], json!({}));
}

#[test]
fn hydrate_rejects_array_and_object_values() {
    for bad in [json!([1, 2, 3]), json!({"nested": true})] {
        let err = Field::hydrate(json!({
            "uuid": "u",
            "join_uuid": "j",
            "name": "n",
            "type": "t",
            "value": bad,
        }))
        .unwrap_err();

        assert!(err.is_invalid_value(), "expected InvalidValue, got {err}");
    }
}

#[test]
fn hydrate_reports_missing_keys_as_invalid_records() {
    let err = Field::hydrate(json!({"uuid": "u"})).unwrap_err();

    assert!(err.is_invalid_record());
    assert_eq!(err.entity_kind(), Some(EntityKind::Field));
}

#[test]
fn serde_derive_matches_wire_shape() {
    let record = field_record("j-1", "u-1");

    // the derive-based path accepts the same records hydrate does
    let field: Field = serde_json::from_value(record.clone()).unwrap();
    assert_eq!(serde_json::to_value(&field).unwrap(), record);
    assert_eq!(field, Field::hydrate(record).unwrap());
}

#[test]
fn mutate_returns_a_distinct_instance() {
    let original = named_field("count", 1);
    let mutated = original.mutate(2);

    assert_ne!(original, mutated);
    assert_eq!(*original.value(), 1);
    assert_eq!(*mutated.value(), 2);

    // all identity and payload preserved
    assert_eq!(mutated.uuid(), original.uuid());
    assert_eq!(mutated.join_uuid(), original.join_uuid());
    assert_eq!(mutated.name(), original.name());
    assert_eq!(mutated.kind(), original.kind());
    assert_eq!(mutated.arguments(), original.arguments());
    assert_eq!(mutated.composite_key(), original.composite_key());
}

#[test]
fn mutate_can_null_out_a_value() {
    let field = named_field("count", 1);
    let cleared = field.mutate(Value::Null);

    assert!(cleared.is_null());
    assert!(!field.is_null());
}

#[test]
fn arguments_are_carried_verbatim() {
    let record = json!({
        "uuid": "u",
        "join_uuid": "j",
        "name": "n",
        "type": "t",
        "value": null,
        "arguments": {"options": ["a", "b"], "weights": {"a": 1}},
    });

    let field = Field::hydrate(record.clone()).unwrap();
    assert_eq!(field.to_value(), record);
    assert_eq!(field.arguments()["options"], json!(["a", "b"]));
}
