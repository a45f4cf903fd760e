//!
//! Params: typed parameter and field value objects with two complementary
//! container abstractions over them.
//!
//! ## Core Concepts
//!
//! * **Fields (`field::Field`)**: Immutable value objects carrying identity
//!   (`uuid`, `join_uuid`), opaque descriptive payload (`name`, `type`,
//!   `arguments`), and a typed scalar [`Value`].
//! * **Params (`param::Param`)**: Immutable identity and payload plus an
//!   owned collection of fields (a [`FieldMap`]).
//! * **Lists (`list::List`)**: Ordered, integer-indexed, gap-free sequences
//!   ([`FieldList`], [`ParamList`]) supporting functional queries
//!   (`filter`/`map`/`reduce`/`find`).
//! * **Maps (`map::Map`)**: Insertion-ordered associative containers keyed
//!   by each entity's `join_uuid` ([`FieldMap`], [`ParamMap`]), including
//!   the composite-key and flattened-value-extraction helpers.
//! * **Hydration**: Lossless conversion from plain nested JSON into the
//!   entity graph and back; serializing a hydrated record reproduces it
//!   (array-form param fields are canonicalized to the map form).
//!
//! ## Concurrency
//!
//! Everything here is a direct, synchronous computation over in-memory
//! structures. The container types are plain data (`Send`/`Sync` where
//! their elements are) but are not internally synchronized; callers in
//! multi-threaded hosts must serialize mutation externally. Iteration is a
//! fresh, independent traversal each time it is requested.

pub mod errors;
pub mod field;
pub mod list;
pub mod map;
pub mod param;
pub mod traits;
pub mod value;

pub use errors::{EntityKind, ParamsError};
pub use field::{Arguments, Field};
pub use list::{FieldList, List, ParamList};
pub use map::{FieldMap, Map, ParamMap};
pub use param::Param;
pub use traits::Entity;
pub use value::Value;

/// Result type used throughout the params library.
pub type Result<T> = std::result::Result<T, ParamsError>;
