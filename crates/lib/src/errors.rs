//! Error types for parameter containers.
//!
//! This module defines the structured error type shared by the entity and
//! container types, providing detailed context for lookup misses, malformed
//! records, and rejected field values.

use std::fmt;

use thiserror::Error;

/// The kind of entity an operation was acting on when it failed.
///
/// Lookup errors are parameterized by entity kind so that a miss while
/// searching a [`crate::FieldMap`] reads differently from a miss while
/// searching a [`crate::ParamMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A [`crate::Field`] was being sought or hydrated
    Field,
    /// A [`crate::Param`] was being sought or hydrated
    Param,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Field => write!(f, "Field"),
            EntityKind::Param => write!(f, "Param"),
        }
    }
}

/// Structured error types for parameter container operations.
///
/// Every failure is surfaced synchronously at the offending call; nothing is
/// retried or recovered internally. Callers that want to avoid the fallible
/// paths can probe with `has` before `get`.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ParamsError {
    /// A field value outside the permitted scalar set was supplied
    #[error("invalid field value: {reason}")]
    InvalidValue { reason: String },

    /// A record could not be hydrated for a reason other than its value type
    #[error("invalid {kind} record: {reason}")]
    InvalidRecord { kind: EntityKind, reason: String },

    /// A keyed-map lookup or search found no matching entry
    #[error("no {kind} matching the given criteria was found")]
    NotFound {
        kind: EntityKind,
        /// The join uuid that missed, when the lookup was by key
        key: Option<String>,
    },

    /// An indexed-list search found no matching element
    #[error("no {kind} matching the given criteria was found in the list")]
    NoSuchItem { kind: EntityKind },

    /// A checked list index had no element
    #[error("list index {index} out of bounds (len: {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl ParamsError {
    /// Check if this error is a rejected field value
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, ParamsError::InvalidValue { .. })
    }

    /// Check if this error is a malformed record
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, ParamsError::InvalidRecord { .. })
    }

    /// Check if this error is a keyed-map miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParamsError::NotFound { .. })
    }

    /// Check if this error is an indexed-list search miss
    pub fn is_no_such_item(&self) -> bool {
        matches!(self, ParamsError::NoSuchItem { .. })
    }

    /// Check if this error is a checked-indexing miss
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ParamsError::IndexOutOfBounds { .. })
    }

    /// Get the entity kind this error refers to, if it carries one
    pub fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            ParamsError::InvalidRecord { kind, .. }
            | ParamsError::NotFound { kind, .. }
            | ParamsError::NoSuchItem { kind } => Some(*kind),
            _ => None,
        }
    }

    /// Get the join uuid if this is a keyed lookup miss
    pub fn key(&self) -> Option<&str> {
        match self {
            ParamsError::NotFound { key, .. } => key.as_deref(),
            _ => None,
        }
    }
}
