//! # Arrayhelpers
//!
//! `arrayhelpers` is a collection of small, stateless utilities for in-memory
//! collections: generating combinations, sorting records on several keys,
//! merging associative arrays without renumbering their keys, cross-referencing
//! key lists and searching sorted slices.
//!
//! Every function is pure. Nothing is cached between calls and no global state
//! exists, so all of them can be called concurrently without coordination.
//!
//! ## Key Features
//!
//! - **Combinations**: [`combinations_of`] enumerates the Cartesian product of a
//!   mix of fixed values and lists of alternatives, lazily and in odometer order.
//! - **Multi-key sorting**: [`multisort`] and [`multisort_mut`] order records by
//!   any number of ascending/descending keys. The [`FieldAccessible`] trait lets
//!   maps, JSON objects and plain structs be sorted the same way.
//! - **Fail fast**: a missing field or two values that cannot be compared abort
//!   the sort with an [`ArrayError`] before anything is reordered.
//! - **Associative merges**: [`merge_assoc`] and [`merge_assoc_recursive`] keep
//!   keys and their first-seen positions.
//!
//! ## Usage
//!
//! ### Combinations
//!
//! ```rust
//! use arrayhelpers::combinations::{combinations_of, elements_from_json};
//! use serde_json::json;
//!
//! let input = elements_from_json(&[json!(["a", "b", "c"]), json!(1), json!(2), json!(["x", "y", "z"])]);
//! let all: Vec<_> = combinations_of(&input).collect();
//!
//! assert_eq!(all.len(), 9);
//! assert_eq!(all[0], vec![json!("a"), json!(1), json!(2), json!("x")]);
//! assert_eq!(all[8], vec![json!("c"), json!(1), json!(2), json!("z")]);
//! ```
//!
//! ### Sorting Records
//!
//! Struct-like records opt in with [`field_accessible!`].
//!
//! ```rust
//! use arrayhelpers::{field_accessible, multisort_mut};
//!
//! struct TestItem {
//!     prop1: i32,
//!     prop2: i32,
//! }
//!
//! field_accessible!(TestItem { prop1, prop2 });
//!
//! let mut items = vec![
//!     TestItem { prop1: 1, prop2: 2 },
//!     TestItem { prop1: 17, prop2: 1 },
//!     TestItem { prop1: 1, prop2: 900 },
//! ];
//!
//! // Ascending on prop1, then descending on prop2.
//! multisort_mut(&mut items, &[("prop1", true).into(), ("prop2", false).into()]).unwrap();
//!
//! let order: Vec<(i32, i32)> = items.iter().map(|i| (i.prop1, i.prop2)).collect();
//! assert_eq!(order, vec![(1, 900), (1, 2), (17, 1)]);
//! ```

pub mod combinations;
pub mod core;
pub mod cross_reference;
pub mod error;
pub mod merge;
pub mod multisort;
pub mod search;

pub use crate::combinations::{Combinations, Element, combinations_of, generate};
pub use crate::core::{AsFieldValue, FieldAccessible, FieldValue, Order, SortKey};
pub use crate::cross_reference::{CrossReference, KeyedCollection, cross_reference};
pub use crate::error::{ArrayError, Result};
pub use crate::merge::{merge_assoc, merge_assoc_recursive};
pub use crate::multisort::{compare_records, multisort, multisort_mut, multisorted};
pub use crate::search::{sorted_find, sorted_find_by, sorted_find_by_key, sorted_insert_position};

pub mod prelude {
    pub use crate::combinations::{Element, combinations_of, generate};
    pub use crate::core::{FieldAccessible, SortKey};
    pub use crate::cross_reference::cross_reference;
    pub use crate::error::ArrayError;
    pub use crate::merge::{merge_assoc, merge_assoc_recursive};
    pub use crate::multisort::{multisort, multisort_mut};
    pub use crate::search::sorted_find;
}
