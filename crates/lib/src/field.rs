//! The `Field` value object.
//!
//! A [`Field`] is an immutable, typed scalar with identity: a `uuid` naming
//! the field itself, a `join_uuid` naming its slot in the owning
//! [`crate::FieldMap`], opaque descriptive payload (`name`, `type`,
//! `arguments`), and a [`Value`]. "Mutation" never touches an existing
//! instance; [`Field::mutate`] returns a fresh field carrying the new value
//! and the old identity.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{EntityKind, ParamsError},
    traits::{Entity, into_object, json_kind, take_string},
    value::Value,
};

/// Opaque per-field argument metadata, keyed by string.
///
/// Arguments are carried verbatim through hydration and serialization; the
/// crate never interprets them.
pub type Arguments = serde_json::Map<String, serde_json::Value>;

/// An immutable named, typed scalar value with identity.
///
/// Wire form (see [`Field::hydrate`] / [`Field::to_value`]):
///
/// ```json
/// {
///   "uuid": "...",
///   "join_uuid": "...",
///   "name": "...",
///   "type": "...",
///   "value": "scalar or null",
///   "arguments": {}
/// }
/// ```
///
/// `name`, `type`, and `arguments` are opaque payload the caller assigns
/// meaning to.
///
/// # Examples
///
/// ```
/// # use params::Field;
/// let field = Field::new("f-1", "slot-1", "age", "integer", 30);
/// assert_eq!(*field.value(), 30);
/// assert_eq!(field.composite_key(), "slot-1_f-1");
///
/// let bumped = field.mutate(31);
/// assert_eq!(*field.value(), 30); // original untouched
/// assert_eq!(*bumped.value(), 31);
/// assert_eq!(bumped.uuid(), field.uuid());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    uuid: String,
    join_uuid: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    arguments: Arguments,
}

impl Field {
    /// Creates a field with empty arguments.
    pub fn new(
        uuid: impl Into<String>,
        join_uuid: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            join_uuid: join_uuid.into(),
            name: name.into(),
            kind: kind.into(),
            value: value.into(),
            arguments: Arguments::new(),
        }
    }

    /// Attaches argument metadata, consuming the field.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    /// Builds a field from a plain JSON record.
    ///
    /// `value` defaults to null and `arguments` to empty when absent. A
    /// non-scalar `value` fails with
    /// [`ParamsError::InvalidValue`]; any other malformed
    /// shape fails with [`ParamsError::InvalidRecord`].
    pub fn hydrate(record: serde_json::Value) -> crate::Result<Self> {
        let mut record = into_object(record, EntityKind::Field)?;

        let value = match record.remove("value") {
            Some(raw) => Value::try_from(raw)?,
            None => Value::Null,
        };

        let arguments = match record.remove("arguments") {
            Some(serde_json::Value::Object(map)) => map,
            Some(other) => {
                return Err(ParamsError::InvalidRecord {
                    kind: EntityKind::Field,
                    reason: format!("key 'arguments' must be an object, got {}", json_kind(&other)),
                });
            }
            None => Arguments::new(),
        };

        Ok(Self {
            uuid: take_string(&mut record, "uuid", EntityKind::Field)?,
            join_uuid: take_string(&mut record, "join_uuid", EntityKind::Field)?,
            name: take_string(&mut record, "name", EntityKind::Field)?,
            kind: take_string(&mut record, "type", EntityKind::Field)?,
            value,
            arguments,
        })
    }

    /// Identity of this field within its owning param
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// The key under which this field is stored in its owning map
    pub fn join_uuid(&self) -> &str {
        &self.join_uuid
    }

    /// Opaque descriptive name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque descriptive type (the wire key `"type"`)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The carried scalar value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Opaque argument metadata
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Returns true if the carried value is null
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Stable flattened-lookup key: `join_uuid` + `"_"` + `uuid`
    pub fn composite_key(&self) -> String {
        Entity::composite_key(self)
    }

    /// Returns a new field with identical identity and payload carrying
    /// `value` instead.
    ///
    /// The receiver is untouched; callers holding the original reference
    /// keep the pre-mutation value.
    #[must_use]
    pub fn mutate(&self, value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }

    /// Serializes to a plain JSON record, the exact inverse of
    /// [`Field::hydrate`].
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "uuid": self.uuid,
            "join_uuid": self.join_uuid,
            "name": self.name,
            "type": self.kind,
            "value": self.value,
            "arguments": self.arguments,
        })
    }
}

impl Entity for Field {
    const KIND: EntityKind = EntityKind::Field;

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn join_uuid(&self) -> &str {
        &self.join_uuid
    }

    fn hydrate(record: serde_json::Value) -> crate::Result<Self> {
        Field::hydrate(record)
    }

    fn to_value(&self) -> serde_json::Value {
        Field::to_value(self)
    }
}
