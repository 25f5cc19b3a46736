//! Bounded top-k selection structures.
//!
//! A [`TopKSelector`] retains, over a stream of scored candidates, only the
//! `k` with the smallest distance seen so far. Three interchangeable
//! implementations encode the same contract with different mechanics:
//!
//! | Strategy | Backing store | Cost per offer |
//! |----------|---------------|----------------|
//! | [`SortedListSelector`] | insertion-sorted `Vec` | O(k) |
//! | [`BinaryHeapSelector`] | array-embedded max-heap | O(log k) |
//! | [`StdHeapSelector`] | `std::collections::BinaryHeap` | O(log k) |
//!
//! # Ordering and tie-breaks
//!
//! All three order candidates by the [`Neighbor`] total order (ascending
//! distance, ties broken by ascending label). Admission at capacity and
//! eviction both use that single order, so for any offer stream the three
//! implementations maintain identical retained sets, and the final result
//! is independent of offer order: the k smallest candidates under the
//! total order among everything offered.

mod binary_heap;
mod sorted_list;
mod std_heap;

pub use binary_heap::BinaryHeapSelector;
pub use sorted_list::SortedListSelector;
pub use std_heap::StdHeapSelector;

use crate::dataset::PointSet;
use crate::distance::squared_euclidean;
use crate::error::Result;
use crate::point::Neighbor;
use serde::{Deserialize, Serialize};

/// Bounded top-k selection over a stream of scored candidates.
///
/// Implementations retain at most `capacity` candidates: the ones with the
/// smallest distances offered so far. The retained candidate with the
/// largest distance is always reachable in O(1) via [`peek`](Self::peek).
pub trait TopKSelector {
    /// Considers `candidate` for inclusion.
    ///
    /// Below capacity the candidate is always accepted. At capacity it is
    /// accepted iff it precedes the current maximum in the [`Neighbor`]
    /// total order, in which case that maximum is evicted. Returns whether
    /// the candidate was retained; on rejection the selector is unchanged.
    fn offer(&mut self, candidate: Neighbor) -> bool;

    /// Removes and returns the retained candidate with the largest
    /// distance, or `None` if the selector is empty.
    fn poll(&mut self) -> Option<Neighbor>;

    /// Returns the retained candidate with the largest distance without
    /// removing it, or `None` if the selector is empty.
    #[must_use]
    fn peek(&self) -> Option<Neighbor>;

    /// Returns the current number of retained candidates.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns the target capacity `k` fixed at construction.
    #[must_use]
    fn capacity(&self) -> usize;

    /// Returns true if no candidates are retained.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs one full k-NN selection: offers every point of `points` in
    /// iteration order (no early termination), then drains the retained
    /// candidates into ascending distance order.
    ///
    /// Ranking uses squared distances; the returned [`Neighbor`]s carry
    /// true Euclidean distances. The result length is `min(k, n)`.
    ///
    /// The selector is left empty afterwards; a selector is meant to serve
    /// a single query and be discarded.
    ///
    /// # Panics
    ///
    /// Panics if `query` and the points disagree on dimension. Use
    /// [`knn_search`](crate::search::knn_search) for validated input.
    fn find_knn(&mut self, points: &PointSet, query: &[f32]) -> Vec<Neighbor> {
        for point in points {
            self.offer(Neighbor::new(
                point.label,
                squared_euclidean(&point.vector, query),
            ));
        }

        // Repeated poll yields descending distance order; reverse once.
        let mut result = Vec::with_capacity(self.len());
        while let Some(neighbor) = self.poll() {
            result.push(neighbor);
        }
        result.reverse();

        for neighbor in &mut result {
            neighbor.distance = neighbor.distance.sqrt();
        }
        result
    }
}

/// Selection strategy, fixed when a selector is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorStrategy {
    /// Insertion-sorted bounded list, O(k) per offer.
    SortedList,

    /// Hand-rolled array-backed bounded binary max-heap, O(log k) per
    /// offer (default).
    #[default]
    BinaryHeap,

    /// `std::collections::BinaryHeap` with manual capacity trimming.
    /// Behaviorally identical to [`SelectorStrategy::BinaryHeap`]; kept to
    /// show the custom heap is not required for correctness.
    StdHeap,
}

impl SelectorStrategy {
    /// All strategies, in comparison-report order.
    pub const ALL: [Self; 3] = [Self::SortedList, Self::BinaryHeap, Self::StdHeap];

    /// Builds a boxed selector of this strategy with capacity `k`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`](crate::Error::InvalidCapacity)
    /// if `k` is zero.
    pub fn build(self, k: usize) -> Result<Box<dyn TopKSelector + Send>> {
        Ok(match self {
            Self::SortedList => Box::new(SortedListSelector::new(k)?),
            Self::BinaryHeap => Box::new(BinaryHeapSelector::new(k)?),
            Self::StdHeap => Box::new(StdHeapSelector::new(k)?),
        })
    }

    /// Short stable name, used in result file names and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SortedList => "sorted-list",
            Self::BinaryHeap => "binary-heap",
            Self::StdHeap => "std-heap",
        }
    }
}

impl std::fmt::Display for SelectorStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
