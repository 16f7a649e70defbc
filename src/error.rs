//! The error type shared by the fallible tree operations.

use thiserror::Error;

/// Errors returned by the fallible [`Tree`][crate::Tree] and
/// [`TreeBuilder`][crate::TreeBuilder] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The builder was asked to produce a tree without ever being told how to order values.
    #[error("no ordering was configured for the tree")]
    InvalidOrdering,
    /// A destination index lies past the end of the destination slice.
    #[error("index {index} is out of range for a destination of length {len}")]
    IndexOutOfRange {
        /// The offending start index.
        index: usize,
        /// Length of the destination.
        len: usize,
    },
    /// The destination doesn't have room for every value in the tree.
    #[error("destination has room for {available} values but the tree holds {needed}")]
    InsufficientSpace {
        /// How many slots the copy needs.
        needed: usize,
        /// How many slots remain after the start index.
        available: usize,
    },
}
