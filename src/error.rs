//! Error type shared by the fallible helpers.
//!
//! Combination generation and sorted search cannot fail; the record sorter
//! and the associative merges can, and they fail before producing any output.

use thiserror::Error;

/// Errors raised by [`multisort`](crate::multisort) and the merge helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// A record does not expose the requested sort key.
    #[error("record {record} has no field named `{key}`")]
    MissingKey {
        /// The sort key that could not be resolved.
        key: String,
        /// Position of the offending record in the input.
        record: usize,
    },

    /// Two records hold values for the same key that cannot be ordered
    /// against each other.
    #[error(
        "field `{key}` is not comparable: record {left_record} holds {left}, record {right_record} holds {right}"
    )]
    TypeMismatch {
        /// The sort key whose values disagree.
        key: String,
        /// Position of the record whose value set the expected kind.
        left_record: usize,
        /// Kind of value held by `left_record`.
        left: &'static str,
        /// Position of the first record that disagrees.
        right_record: usize,
        /// Kind of value held by `right_record`.
        right: &'static str,
    },

    /// A merge input was a scalar rather than an array or object.
    #[error("merge input {position} is not an array or object")]
    NotAnArray {
        /// Position of the offending input.
        position: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArrayError>;
