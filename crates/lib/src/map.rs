//! Key-addressed entity maps.
//!
//! [`Map`] wraps an insertion-ordered mapping from each entity's
//! `join_uuid` to the entity itself. At most one entity per key: inserting
//! under an existing key replaces the prior entry. Iteration order follows
//! insertion order and is stable for the container's lifetime, but carries
//! no further meaning.
//!
//! The key is always derived from the stored entity, never trusted from
//! input: hydrating a mis-keyed mapping self-corrects by re-keying every
//! record from its own `join_uuid` payload.
//!
//! [`FieldMap`] and [`ParamMap`] are the two instantiations; the latter
//! carries the flattened-value-extraction helpers ([`Map::values`],
//! [`Map::pluck_by_name`], [`Map::field_list`]) built on composite keys.

use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::trace;

use crate::{
    errors::ParamsError,
    field::Field,
    param::Param,
    traits::{Entity, json_kind},
    value::Value,
};

/// A map of fields keyed by `join_uuid`. See [`Map`].
pub type FieldMap = Map<Field>;

/// A map of params keyed by `join_uuid`. See [`Map`].
pub type ParamMap = Map<Param>;

/// An insertion-ordered associative container keyed by `join_uuid`.
///
/// # Examples
///
/// ```
/// # use params::{Field, FieldMap};
/// let mut map = FieldMap::new();
/// map.put("slot", Field::new("f", "slot", "size", "int", 3));
///
/// assert!(map.has("slot"));
/// assert_eq!(*map.get("slot").unwrap().value(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Map<T> {
    items: IndexMap<String, T>,
}

impl<T> Map<T> {
    /// Creates an empty map
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Checked lookup; fails with [`ParamsError::NotFound`] when the key
    /// has no entry
    pub fn get(&self, join_uuid: &str) -> crate::Result<&T>
    where
        T: Entity,
    {
        self.items.get(join_uuid).ok_or_else(|| ParamsError::NotFound {
            kind: T::KIND,
            key: Some(join_uuid.to_string()),
        })
    }

    /// Checked mutable lookup
    pub fn get_mut(&mut self, join_uuid: &str) -> crate::Result<&mut T>
    where
        T: Entity,
    {
        self.items
            .get_mut(join_uuid)
            .ok_or_else(|| ParamsError::NotFound {
                kind: T::KIND,
                key: Some(join_uuid.to_string()),
            })
    }

    /// Returns true if the key has an entry
    pub fn has(&self, join_uuid: &str) -> bool {
        self.items.contains_key(join_uuid)
    }

    /// Inserts or replaces the entry under `join_uuid`
    pub fn put(&mut self, join_uuid: impl Into<String>, item: T) {
        self.items.insert(join_uuid.into(), item);
    }

    /// Removes the entry under `join_uuid`; a no-op when absent.
    /// Remaining entries keep their relative order.
    pub fn unset(&mut self, join_uuid: &str) {
        self.items.shift_remove(join_uuid);
    }

    /// Returns a new map containing only the entries matching `predicate`,
    /// keys preserved; the receiver is untouched
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&str, &T) -> bool) -> Self
    where
        T: Clone,
    {
        Self {
            items: self
                .items
                .iter()
                .filter(|(join_uuid, item)| predicate(join_uuid.as_str(), item))
                .map(|(join_uuid, item)| (join_uuid.clone(), item.clone()))
                .collect(),
        }
    }

    /// Applies `f` to every entry in iteration order, collecting the
    /// results into a plain sequence
    pub fn items<U>(&self, mut f: impl FnMut(&str, &T) -> U) -> Vec<U> {
        self.items
            .iter()
            .map(|(join_uuid, item)| f(join_uuid, item))
            .collect()
    }

    /// Builds a new plain mapping from the key/value pair `f` returns per
    /// entry; later entries overwrite earlier ones on key collision
    pub fn map_with_keys<V>(&self, mut f: impl FnMut(&str, &T) -> (String, V)) -> IndexMap<String, V> {
        self.items
            .iter()
            .map(|(join_uuid, item)| f(join_uuid, item))
            .collect()
    }

    /// Left fold over the entries in iteration order
    pub fn reduce<A>(&self, mut f: impl FnMut(A, &str, &T) -> A, initial: A) -> A {
        self.items
            .iter()
            .fold(initial, |acc, (join_uuid, item)| f(acc, join_uuid, item))
    }

    /// Returns the first entry's item matching `predicate`; fails with
    /// [`ParamsError::NotFound`] when none match
    pub fn find(&self, mut predicate: impl FnMut(&str, &T) -> bool) -> crate::Result<&T>
    where
        T: Entity,
    {
        self.items
            .iter()
            .find(|(join_uuid, item)| predicate(join_uuid.as_str(), item))
            .map(|(_, item)| item)
            .ok_or(ParamsError::NotFound {
                kind: T::KIND,
                key: None,
            })
    }

    /// Entry count
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A fresh iterator over `(join_uuid, item)` pairs in iteration order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, T> {
        self.items.iter()
    }
}

impl<T: Entity> Map<T> {
    /// Builds a map from plain JSON, accepting either a mapping keyed by
    /// `join_uuid` or an array of records.
    ///
    /// In both forms every record is hydrated through the element type and
    /// re-keyed by the hydrated entity's own `join_uuid`; input keys are
    /// never trusted, so a mis-keyed mapping is self-correcting.
    pub fn hydrate(records: serde_json::Value) -> crate::Result<Self> {
        let mut map = Self::new();

        match records {
            serde_json::Value::Object(entries) => {
                for (input_key, raw) in entries {
                    let item = T::hydrate(raw)?;
                    if input_key != item.join_uuid() {
                        trace!(
                            input_key = %input_key,
                            join_uuid = %item.join_uuid(),
                            kind = %T::KIND,
                            "re-keying record from its payload"
                        );
                    }
                    map.items.insert(item.join_uuid().to_string(), item);
                }
            }
            serde_json::Value::Array(records) => {
                for raw in records {
                    let item = T::hydrate(raw)?;
                    map.items.insert(item.join_uuid().to_string(), item);
                }
            }
            other => {
                return Err(ParamsError::InvalidRecord {
                    kind: T::KIND,
                    reason: format!(
                        "expected a mapping or an array of records, got {}",
                        json_kind(&other)
                    ),
                });
            }
        }

        Ok(map)
    }

    /// Serializes to a plain JSON mapping from `join_uuid` to each item's
    /// record (the canonical map form)
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.items
                .iter()
                .map(|(join_uuid, item)| (join_uuid.clone(), item.to_value()))
                .collect(),
        )
    }
}

impl Map<Field> {
    /// Atomically swaps the field at `join_uuid` for one carrying `value`,
    /// preserving its identity and payload.
    ///
    /// Fails with [`ParamsError::NotFound`] when the key has no entry.
    pub fn mutate(&mut self, join_uuid: &str, value: impl Into<Value>) -> crate::Result<()> {
        let field = self.get_mut(join_uuid)?;
        trace!(join_uuid = %join_uuid, "swapping field for mutated value");
        *field = field.mutate(value);
        Ok(())
    }
}

impl Map<Param> {
    /// Finds the first param named `param_name`, then within its fields the
    /// first field named `field_name`, and returns that field's value.
    ///
    /// The two stages fail independently: a missing param fails with a
    /// param-kind [`ParamsError::NotFound`], a missing field within a found
    /// param with a field-kind one.
    pub fn pluck_by_name(&self, param_name: &str, field_name: &str) -> crate::Result<&Value> {
        let param = self.find(|_, param| param.name() == param_name)?;
        let field = param.fields().find(|_, field| field.name() == field_name)?;

        Ok(field.value())
    }

    /// Flattens every param's every field into a single plain mapping from
    /// `paramJoinUuid_paramUuid_fieldJoinUuid_fieldUuid` to the field's
    /// value, in param-then-field iteration order.
    ///
    /// Composite keys are assumed unique; a collision (which would require
    /// colliding uuids) silently keeps the last write.
    pub fn values(&self) -> IndexMap<String, Value> {
        let mut flattened = IndexMap::new();

        for (_, param) in &self.items {
            for (_, field) in param.fields().iter() {
                flattened.insert(
                    format!("{}_{}", param.composite_key(), field.composite_key()),
                    field.value().clone(),
                );
            }
        }

        flattened
    }

    /// Every field across every param as one flattened sequence, in
    /// param-then-field iteration order
    pub fn field_list(&self) -> Vec<&Field> {
        self.items
            .values()
            .flat_map(|param| param.fields().iter().map(|(_, field)| field))
            .collect()
    }
}

impl<T> Default for Map<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> From<Vec<T>> for Map<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Entity> FromIterator<T> for Map<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|item| (item.join_uuid().to_string(), item))
                .collect(),
        }
    }
}

/// Unchecked key sugar; panics on a missing key per Rust convention.
/// Use [`Map::get`] / [`Map::has`] for the checked path.
impl<T> std::ops::Index<&str> for Map<T> {
    type Output = T;

    fn index(&self, join_uuid: &str) -> &T {
        &self.items[join_uuid]
    }
}

impl<'a, T> IntoIterator for &'a Map<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = indexmap::map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Map<T> {
    type Item = (String, T);
    type IntoIter = indexmap::map::IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// Deserialization accepts both wire forms (mapping or array) and re-keys
// from the payload, matching `hydrate`.
impl<'de, T> serde::Deserialize<'de> for Map<T>
where
    T: serde::Deserialize<'de> + Entity,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, SeqAccess, Visitor};
        use std::fmt;

        struct MapVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for MapVisitor<T>
        where
            T: serde::Deserialize<'de> + Entity,
        {
            type Value = Map<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a mapping keyed by join_uuid or an array of {} records",
                    T::KIND
                )
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut items = IndexMap::with_capacity(access.size_hint().unwrap_or(0));

                while let Some((_, item)) = access.next_entry::<String, T>()? {
                    items.insert(item.join_uuid().to_string(), item);
                }

                Ok(Map { items })
            }

            fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = IndexMap::with_capacity(access.size_hint().unwrap_or(0));

                while let Some(item) = access.next_element::<T>()? {
                    items.insert(item.join_uuid().to_string(), item);
                }

                Ok(Map { items })
            }
        }

        deserializer.deserialize_any(MapVisitor(PhantomData))
    }
}
