//! Shared traits for parameter entities.
//!
//! The [`Entity`] trait is the seam between the value objects
//! ([`crate::Field`], [`crate::Param`]) and the generic containers
//! ([`crate::List`], [`crate::Map`]): it exposes the identity pair the
//! containers key and index by, the entity kind used to parameterize
//! lookup errors, and the hydration/serialization boundary.

use crate::errors::{EntityKind, ParamsError};

/// An identifiable entity that can live in the parameter containers.
///
/// Both [`crate::Field`] and [`crate::Param`] carry the same identity pair:
/// a `uuid` naming the entity itself and a `join_uuid` naming the slot it
/// occupies in its owning map. The two are independent; the composite key
/// concatenates them into a stable flattened-lookup string.
pub trait Entity: Sized {
    /// The entity kind reported by lookup errors for this type
    const KIND: EntityKind;

    /// Identity of this entity within its owner
    fn uuid(&self) -> &str;

    /// The key under which this entity is stored in a keyed map
    fn join_uuid(&self) -> &str;

    /// Builds an entity from a plain JSON record
    fn hydrate(record: serde_json::Value) -> crate::Result<Self>;

    /// Serializes this entity back to its plain JSON record
    fn to_value(&self) -> serde_json::Value;

    /// Stable flattened-lookup key: `join_uuid` + `"_"` + `uuid`
    fn composite_key(&self) -> String {
        format!("{}_{}", self.join_uuid(), self.uuid())
    }
}

/// Names a JSON value's shape for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Unwraps a record into its underlying JSON object.
pub(crate) fn into_object(
    record: serde_json::Value,
    kind: EntityKind,
) -> crate::Result<serde_json::Map<String, serde_json::Value>> {
    match record {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(ParamsError::InvalidRecord {
            kind,
            reason: format!("expected an object, got {}", json_kind(&other)),
        }),
    }
}

/// Removes a required string entry from a record under construction.
pub(crate) fn take_string(
    record: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
    kind: EntityKind,
) -> crate::Result<String> {
    match record.remove(key) {
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(other) => Err(ParamsError::InvalidRecord {
            kind,
            reason: format!("key '{key}' must be a string, got {}", json_kind(&other)),
        }),
        None => Err(ParamsError::InvalidRecord {
            kind,
            reason: format!("missing required key '{key}'"),
        }),
    }
}
