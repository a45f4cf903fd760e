//! Shared builders for the integration tests.
//!
//! Every entity gets fresh random identity strings so tests never collide
//! on uuids by accident.

use params::{Field, FieldMap, Param, Value};
use uuid::Uuid;

/// A fresh random identity string
pub fn rand_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// A field with random identity and the given name/value
pub fn named_field(name: &str, value: impl Into<Value>) -> Field {
    Field::new(rand_uuid(), rand_uuid(), name, "text", value)
}

/// A param with random identity owning the given fields
pub fn named_param(name: &str, fields: Vec<Field>) -> Param {
    Param::new(rand_uuid(), rand_uuid(), name, "group", FieldMap::from(fields))
}

/// A fully-populated field record in wire form
pub fn field_record(join_uuid: &str, uuid: &str) -> serde_json::Value {
    serde_json::json!({
        "uuid": uuid,
        "join_uuid": join_uuid,
        "name": "quantity",
        "type": "integer",
        "value": 5,
        "arguments": {"min": 0, "max": 10},
    })
}
