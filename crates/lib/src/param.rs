//! The `Param` value object.
//!
//! A [`Param`] carries the same identity pair as a [`crate::Field`] plus an
//! owned [`FieldMap`]. Ownership of the fields is exclusive: a field belongs
//! to exactly one param instance at a time, and the map is mutated in place
//! through [`Param::fields_mut`].

use serde::{Deserialize, Serialize};

use crate::{
    errors::EntityKind,
    map::FieldMap,
    traits::{Entity, into_object, take_string},
};

/// A named, typed parameter owning a collection of fields.
///
/// Wire form: `{uuid, join_uuid, name, type, fields}` where `fields` is a
/// mapping from each field's `join_uuid` to its record. On input, `fields`
/// may alternatively be a plain array of field records; hydration normalizes
/// both forms to the map shape, so round-tripping an array-form record
/// canonicalizes it.
///
/// # Examples
///
/// ```
/// # use params::{Field, FieldMap, Param};
/// let fields = FieldMap::from(vec![Field::new("f", "fj", "size", "int", 3)]);
/// let param = Param::new("p", "pj", "widget", "config", fields);
///
/// assert_eq!(param.fields().get("fj").unwrap().name(), "size");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    uuid: String,
    join_uuid: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    fields: FieldMap,
}

impl Param {
    pub fn new(
        uuid: impl Into<String>,
        join_uuid: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        fields: FieldMap,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            join_uuid: join_uuid.into(),
            name: name.into(),
            kind: kind.into(),
            fields,
        }
    }

    /// Builds a param from a plain JSON record.
    ///
    /// The `fields` sub-record may be a mapping keyed by `join_uuid` or a
    /// plain array of field records; both are accepted and re-keyed by each
    /// hydrated field's own `join_uuid`. An absent `fields` key yields an
    /// empty map.
    pub fn hydrate(record: serde_json::Value) -> crate::Result<Self> {
        let mut record = into_object(record, EntityKind::Param)?;

        let fields = match record.remove("fields") {
            Some(raw) => FieldMap::hydrate(raw)?,
            None => FieldMap::new(),
        };

        Ok(Self {
            uuid: take_string(&mut record, "uuid", EntityKind::Param)?,
            join_uuid: take_string(&mut record, "join_uuid", EntityKind::Param)?,
            name: take_string(&mut record, "name", EntityKind::Param)?,
            kind: take_string(&mut record, "type", EntityKind::Param)?,
            fields,
        })
    }

    /// Identity of this param
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// The key under which this param is stored in its owning map
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

    /// The owned field set
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Exclusive borrow of the owned field set; mutations through this
    /// handle are visible to every subsequent read of the param.
    pub fn fields_mut(&mut self) -> &mut FieldMap {
        &mut self.fields
    }

    /// Stable flattened-lookup key: `join_uuid` + `"_"` + `uuid`
    pub fn composite_key(&self) -> String {
        Entity::composite_key(self)
    }

    /// Serializes to a plain JSON record with `fields` in canonical map
    /// form.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "uuid": self.uuid,
            "join_uuid": self.join_uuid,
            "name": self.name,
            "type": self.kind,
            "fields": self.fields.to_value(),
        })
    }
}

impl Entity for Param {
    const KIND: EntityKind = EntityKind::Param;

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn join_uuid(&self) -> &str {
        &self.join_uuid
    }

    fn hydrate(record: serde_json::Value) -> crate::Result<Self> {
        Param::hydrate(record)
    }

    fn to_value(&self) -> serde_json::Value {
        Param::to_value(self)
    }
}
