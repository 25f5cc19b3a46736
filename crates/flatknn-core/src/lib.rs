//! # `FlatKnn` Core
//!
//! Exact brute-force k-nearest-neighbor search engine written in Rust.
//!
//! `FlatKnn` scans a flat (unindexed) candidate set exhaustively and keeps,
//! for each query, the k points with the smallest Euclidean distance. The
//! heart of the crate is the [`TopKSelector`] capability with three
//! interchangeable backing structures:
//!
//! - **Insertion-sorted bounded list**: O(k) per offer, trivially correct
//! - **Array-backed bounded binary max-heap**: O(log k) per offer
//! - **`std::collections::BinaryHeap` with capacity trimming**: same
//!   asymptotics as the custom heap, delegated invariant maintenance
//!
//! All three honor the same contract (retain only the k smallest-distance
//! candidates seen so far) and produce identical results; they differ only
//! in mechanics and cost, which makes the crate a useful harness for
//! comparing selection-structure strategies.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatknn_core::{knn_search, Point, PointSet, SelectorStrategy};
//!
//! let points = PointSet::new(vec![
//!     Point::new(0, vec![0.0, 0.0]),
//!     Point::new(1, vec![3.0, 4.0]),
//!     Point::new(2, vec![1.0, 1.0]),
//! ])?;
//!
//! let neighbors = knn_search(&points, &[0.0, 0.0], 2, SelectorStrategy::BinaryHeap)?;
//! assert_eq!(neighbors[0].label, 0);
//! assert_eq!(neighbors[1].label, 2);
//! # Ok::<(), flatknn_core::Error>(())
//! ```
//!
//! Deliberately out of scope: approximate search and indexing structures
//! (k-d trees, LSH, quantization). The scan is exhaustive by design.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // Acceptable for f32/f64 conversions
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod metrics;
pub mod point;
#[cfg(test)]
mod point_tests;
pub mod search;
pub mod selector;

pub use config::{ConfigError, DataConfig, FlatknnConfig, LoggingConfig, SearchConfig};
pub use dataset::PointSet;
pub use distance::{euclidean, squared_euclidean};
pub use error::{Error, Result};
pub use metrics::{recall_at_k, LatencyStats};
pub use point::{Neighbor, Point};
pub use search::{knn_search, knn_search_batch};
pub use selector::{
    BinaryHeapSelector, SelectorStrategy, SortedListSelector, StdHeapSelector, TopKSelector,
};
