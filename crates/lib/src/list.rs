//! Ordered, integer-indexed entity lists.
//!
//! [`List`] wraps a gap-free sequence: valid indices are always the
//! contiguous range `0..len`, and removing an element shifts everything
//! after it down by one. [`FieldList`] and [`ParamList`] are the two
//! instantiations.
//!
//! Functional queries (`filter`, `map`, `reduce`, `find`) never mutate the
//! receiver; structural mutators (`push`, `set`, `unset`) are plain
//! `&mut self` methods.

use serde::{Deserialize, Serialize};

use crate::{
    errors::ParamsError,
    field::Field,
    param::Param,
    traits::{Entity, json_kind},
};

/// A list of fields. See [`List`].
pub type FieldList = List<Field>;

/// A list of params. See [`List`].
pub type ParamList = List<Param>;

/// An ordered, contiguous, integer-indexed sequence of entities.
///
/// # Examples
///
/// ```
/// # use params::{Field, FieldList};
/// let mut list = FieldList::new();
/// list.push(Field::new("a", "ja", "x", "int", 0));
/// list.push(Field::new("b", "jb", "y", "int", 1));
///
/// list.unset(0);
/// assert_eq!(*list.get(0).unwrap().value(), 1); // shifted down, no gap
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The underlying sequence as a borrowed slice
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Checked element access; fails with
    /// [`ParamsError::IndexOutOfBounds`] when the index has no element
    pub fn get(&self, index: usize) -> crate::Result<&T> {
        self.items.get(index).ok_or(ParamsError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Checked mutable element access
    pub fn get_mut(&mut self, index: usize) -> crate::Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ParamsError::IndexOutOfBounds { index, len })
    }

    /// Returns true if the index has an element
    pub fn has(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Appends an element at the end
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replaces the element at `index`, or appends when the index is out of
    /// bounds.
    ///
    /// The clamp-to-append behavior is deliberate: an out-of-range `set`
    /// lands the item at the current end rather than failing, so the
    /// contiguity invariant can never be broken by a stray index.
    pub fn set(&mut self, index: usize, item: T) {
        if index < self.items.len() {
            self.items[index] = item;
        } else {
            self.items.push(item);
        }
    }

    /// Removes the element at `index`, shifting later elements down by one.
    /// A no-op when the index has no element.
    pub fn unset(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Returns a new list containing only the elements matching `predicate`;
    /// the receiver is untouched
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }

    /// Applies `f` to every element in order, collecting the results
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.items.iter().map(f).collect()
    }

    /// Left fold over the elements in list order
    pub fn reduce<A>(&self, f: impl FnMut(A, &T) -> A, initial: A) -> A {
        self.items.iter().fold(initial, f)
    }

    /// Element count
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A fresh iterator over the elements in list order; pair with
    /// [`Iterator::enumerate`] for `(index, element)` traversal
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Entity> List<T> {
    /// Builds a list from a plain JSON array, mapping each record through
    /// the element type's hydration
    pub fn hydrate(records: serde_json::Value) -> crate::Result<Self> {
        match records {
            serde_json::Value::Array(records) => records.into_iter().map(T::hydrate).collect(),
            other => Err(ParamsError::InvalidRecord {
                kind: T::KIND,
                reason: format!("expected an array of records, got {}", json_kind(&other)),
            }),
        }
    }

    /// Returns the first element matching `predicate`; fails with
    /// [`ParamsError::NoSuchItem`] when none match
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> crate::Result<&T> {
        self.items
            .iter()
            .find(|item| predicate(item))
            .ok_or(ParamsError::NoSuchItem { kind: T::KIND })
    }

    /// Serializes to a plain JSON array of each element's record, in list
    /// order
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.items.iter().map(|item| item.to_value()).collect())
    }
}

impl List<Field> {
    /// Returns a new list holding this list's fields followed by the
    /// other's, in order; neither receiver is mutated
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            items: self.items.iter().chain(other.items.iter()).cloned().collect(),
        }
    }
}

impl List<Param> {
    /// Folds the list into a single [`FieldList`] by concatenating every
    /// param's fields in list order (fields within a param keep their map
    /// iteration order)
    #[must_use]
    pub fn collapse(&self) -> FieldList {
        self.reduce(
            |mut acc, param| {
                for (_, field) in param.fields().iter() {
                    acc.push(field.clone());
                }
                acc
            },
            FieldList::new(),
        )
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Unchecked index sugar; panics on a missing index per Rust convention.
/// Use [`List::get`] / [`List::has`] for the checked path.
impl<T> std::ops::Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
