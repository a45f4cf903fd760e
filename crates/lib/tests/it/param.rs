//! Param value object tests: hydration in both field forms, canonical
//! serialization, and in-place field-set mutation.

use params::{Field, FieldMap, Param};
use serde_json::json;

use crate::helpers::*;

fn param_record_map_form() -> serde_json::Value {
    json!({
        "uuid": "p-u",
        "join_uuid": "p-j",
        "name": "widget",
        "type": "group",
        "fields": {
            "f-j1": {
                "uuid": "f-u1",
                "join_uuid": "f-j1",
                "name": "width",
                "type": "integer",
                "value": 10,
                "arguments": {},
            },
            "f-j2": {
                "uuid": "f-u2",
                "join_uuid": "f-j2",
                "name": "height",
                "type": "integer",
                "value": 20,
                "arguments": {},
            },
        },
    })
}

#[test]
fn hydrate_accepts_map_form_and_round_trips() {
    let record = param_record_map_form();

    let param = Param::hydrate(record.clone()).unwrap();

    assert_eq!(param.uuid(), "p-u");
    assert_eq!(param.name(), "widget");
    assert_eq!(param.fields().len(), 2);
    assert_eq!(param.to_value(), record);
}

#[test]
fn hydrate_accepts_array_form_and_canonicalizes() {
    let array_form = json!({
        "uuid": "p-u",
        "join_uuid": "p-j",
        "name": "widget",
        "type": "group",
        "fields": [
            {
                "uuid": "f-u1",
                "join_uuid": "f-j1",
                "name": "width",
                "type": "integer",
                "value": 10,
                "arguments": {},
            },
            {
                "uuid": "f-u2",
                "join_uuid": "f-j2",
                "name": "height",
                "type": "integer",
                "value": 20,
                "arguments": {},
            },
        ],
    });

    let param = Param::hydrate(array_form).unwrap();

    // serialization normalizes to the map form keyed by join_uuid
    assert_eq!(param.to_value(), param_record_map_form());
}

#[test]
fn hydrate_defaults_absent_fields_to_empty() {
    let param = Param::hydrate(json!({
        "uuid": "p-u",
        "join_uuid": "p-j",
        "name": "widget",
        "type": "group",
    }))
    .unwrap();

    assert!(param.fields().is_empty());
}

#[test]
fn composite_key_joins_join_uuid_and_uuid() {
    let param = Param::new("p-u", "p-j", "widget", "group", FieldMap::new());
    assert_eq!(param.composite_key(), "p-j_p-u");
}

#[test]
fn fields_mut_mutates_the_owned_map_in_place() {
    let mut param = named_param("widget", vec![]);
    assert!(param.fields().is_empty());

    let field = Field::new("f-u", "f-j", "width", "integer", 10);
    param.fields_mut().put("f-j", field);

    assert_eq!(param.fields().len(), 1);
    assert_eq!(*param.fields().get("f-j").unwrap().value(), 10);

    param.fields_mut().mutate("f-j", 11).unwrap();
    assert_eq!(*param.fields().get("f-j").unwrap().value(), 11);
}

#[test]
fn serde_derive_matches_wire_shape() {
    let record = param_record_map_form();

    let param: Param = serde_json::from_value(record.clone()).unwrap();
    assert_eq!(serde_json::to_value(&param).unwrap(), record);
    assert_eq!(param, Param::hydrate(record).unwrap());
}

#[test]
fn nested_bad_field_value_surfaces_as_invalid_value() {
    let err = Param::hydrate(json!({
        "uuid": "p-u",
        "join_uuid": "p-j",
        "name": "widget",
        "type": "group",
        "fields": [
            {
                "uuid": "f-u",
                "join_uuid": "f-j",
                "name": "bad",
                "type": "integer",
                "value": [1, 2],
            },
        ],
    }))
    .unwrap_err();

    assert!(err.is_invalid_value());
}
