//! Point and neighbor data structures.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A labelled point in the candidate or query set.
///
/// A point consists of:
/// - A stable integer label (its identity in result files)
/// - A fixed-dimension coordinate vector, immutable after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    /// Stable identity of the point.
    pub label: u64,

    /// The coordinate vector.
    pub vector: Vec<f32>,
}

impl Point {
    /// Creates a new point with the given label and coordinates.
    #[must_use]
    pub fn new(label: u64, vector: Vec<f32>) -> Self {
        Self { label, vector }
    }

    /// Returns the dimension of the coordinate vector.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

/// A scored candidate: a point's label paired with its distance to a query.
///
/// Distances are computed once and travel with the label by value. Points
/// themselves stay immutable, so candidate sets can be shared freely between
/// query workers without synchronization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Neighbor {
    /// Label of the candidate point.
    pub label: u64,

    /// Distance to the query (interpretation is up to the producer;
    /// selectors only require a consistent ordering).
    pub distance: f32,
}

impl Neighbor {
    /// Creates a new scored candidate.
    #[must_use]
    pub const fn new(label: u64, distance: f32) -> Self {
        Self { label, distance }
    }
}

impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        // Bit comparison for consistency with total_cmp: NaN == NaN
        // (same bits) and -0.0 != +0.0.
        self.label == other.label && self.distance.to_bits() == other.distance.to_bits()
    }
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    /// Total order: ascending distance, ties broken by ascending label.
    ///
    /// `f32::total_cmp` provides IEEE 754 total ordering
    /// (-NaN < -∞ < ... < -0 < +0 < ... < +∞ < +NaN), keeping Ord/Eq
    /// consistent even for NaN distances and preventing heap corruption.
    /// The label tie-break makes eviction among equal distances
    /// deterministic across all selector implementations.
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.label.cmp(&other.label))
    }
}
