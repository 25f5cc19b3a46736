//! Array-backed bounded binary max-heap selector.

use super::TopKSelector;
use crate::error::{Error, Result};
use crate::point::Neighbor;

/// Bounded top-k selector backed by a complete binary max-heap embedded in
/// a `Vec` (parent at `i`, children at `2i + 1` and `2i + 2`), with the
/// maximum-distance candidate at index 0.
///
/// Offers and evictions cost O(log k) via hand-rolled sift-up/sift-down,
/// O(n log k) for a full scan. The asymptotically preferred variant for
/// large n and k.
#[derive(Debug, Clone)]
pub struct BinaryHeapSelector {
    capacity: usize,
    heap: Vec<Neighbor>,
}

impl BinaryHeapSelector {
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
            // +1: offer briefly holds k+1 entries before the eviction poll.
            heap: Vec::with_capacity(k + 1),
        })
    }

    /// Restores the heap property upwards from `index` after an append:
    /// swap with the parent while the parent precedes the entry in the
    /// total order.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index] <= self.heap[parent] {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    /// Restores the heap property downwards from `index` after a root
    /// replacement: swap with the larger child while that child follows
    /// the entry in the total order.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.heap.len() {
                break;
            }

            let mut larger_child = left;
            let right = left + 1;
            if right < self.heap.len() && self.heap[left] < self.heap[right] {
                larger_child = right;
            }

            if self.heap[larger_child] <= self.heap[index] {
                break;
            }
            self.heap.swap(index, larger_child);
            index = larger_child;
        }
    }
}

impl TopKSelector for BinaryHeapSelector {
    fn offer(&mut self, candidate: Neighbor) -> bool {
        if self.heap.len() == self.capacity {
            // Full: reject anything that is not strictly closer than the
            // root, then append + sift-up and evict the old maximum.
            if candidate >= self.heap[0] {
                return false;
            }
            self.heap.push(candidate);
            self.sift_up(self.heap.len() - 1);
            let _evicted = self.poll();
            return true;
        }

        self.heap.push(candidate);
        self.sift_up(self.heap.len() - 1);
        true
    }

    fn poll(&mut self) -> Option<Neighbor> {
        if self.heap.is_empty() {
            return None;
        }

        // Swap root with the last entry, shrink, repair from the root.
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let head = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        head
    }

    fn peek(&self) -> Option<Neighbor> {
        self.heap.first().copied()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
