//! Error types for `FlatKnn`.
//!
//! The taxonomy is deliberately small: reading from an empty selector is an
//! `Option`, not an error, and offering fewer candidates than `k` just
//! yields a shorter result. Errors are reserved for contract violations
//! (bad `k`, mismatched dimensions, empty dataset) that signal a corrupted
//! dataset or a caller bug, none of which are retried or recovered
//! mid-selection.

use thiserror::Error;

/// Result type alias for `FlatKnn` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `FlatKnn` operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Vector dimensions disagree.
    ///
    /// A mismatch aborts the whole operation rather than skipping the
    /// offending vector: it signals a corrupted dataset, not a bad point.
    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// A selector was constructed with an unusable capacity.
    #[error("Top-k capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// A `PointSet` was constructed from zero points.
    #[error("Point set must contain at least one point")]
    EmptyPointSet,
}
