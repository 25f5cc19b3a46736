//! Standard-library max-heap selector with manual capacity trimming.

use super::TopKSelector;
use crate::error::{Error, Result};
use crate::point::Neighbor;
use std::collections::BinaryHeap;

/// Bounded top-k selector delegating heap maintenance to
/// `std::collections::BinaryHeap` (a max-heap under the [`Neighbor`] total
/// order) and layering the capacity policy on top: whenever an offer
/// pushes occupancy past `k`, the maximum is immediately popped.
///
/// Behaviorally identical to
/// [`BinaryHeapSelector`](super::BinaryHeapSelector) at the same O(n log k)
/// cost; exists to show the hand-rolled heap is a teaching artifact, not a
/// correctness requirement.
#[derive(Debug, Clone)]
pub struct StdHeapSelector {
    capacity: usize,
    heap: BinaryHeap<Neighbor>,
}

impl StdHeapSelector {
    /// Creates a selector retaining at most `k` candidates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidCapacity(k));
        }
        Ok(Self {
            capacity: k,
            heap: BinaryHeap::with_capacity(k + 1),
        })
    }
}

impl TopKSelector for StdHeapSelector {
    fn offer(&mut self, candidate: Neighbor) -> bool {
        if self.heap.len() == self.capacity {
            match self.heap.peek() {
                Some(max) if candidate >= *max => return false,
                _ => {}
            }
        }

        self.heap.push(candidate);

        // The library heap is unbounded; trim back to capacity ourselves.
        if self.heap.len() > self.capacity {
            let _evicted = self.heap.pop();
        }
        true
    }

    fn poll(&mut self) -> Option<Neighbor> {
        self.heap.pop()
    }

    fn peek(&self) -> Option<Neighbor> {
        self.heap.peek().copied()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
