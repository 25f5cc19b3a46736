//! Insertion-sorted bounded list selector.

use super::TopKSelector;
use crate::dataset::PointSet;
use crate::distance::squared_euclidean;
use crate::error::{Error, Result};
use crate::point::Neighbor;

/// Bounded top-k selector backed by a `Vec` kept sorted ascending by the
/// [`Neighbor`] total order at all times.
///
/// Each offer does a linear scan for the insertion point and an O(k)
/// element shift, O(nk) for a full scan of n candidates. The sort order is
/// maintained incrementally, never recomputed. Simple and cache-friendly;
/// the baseline the heap variants are measured against.
#[derive(Debug, Clone)]
pub struct SortedListSelector {
    capacity: usize,
    entries: Vec<Neighbor>,
}

impl SortedListSelector {
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
            entries: Vec::with_capacity(k),
        })
    }

    /// Linear scan for the first position whose entry follows `candidate`
    /// in the total order, or `None` if the candidate follows everything.
    fn insertion_point(&self, candidate: Neighbor) -> Option<usize> {
        self.entries.iter().position(|entry| candidate < *entry)
    }
}

impl TopKSelector for SortedListSelector {
    fn offer(&mut self, candidate: Neighbor) -> bool {
        if self.entries.len() == self.capacity {
            // Full: the candidate must displace something. No insertion
            // point means it is >= the current maximum, so reject.
            let Some(position) = self.insertion_point(candidate) else {
                return false;
            };
            self.entries.pop();
            self.entries.insert(position, candidate);
            return true;
        }

        match self.insertion_point(candidate) {
            Some(position) => self.entries.insert(position, candidate),
            None => self.entries.push(candidate),
        }
        true
    }

    fn poll(&mut self) -> Option<Neighbor> {
        // Last element is the maximum by construction of the sort order.
        self.entries.pop()
    }

    fn peek(&self) -> Option<Neighbor> {
        self.entries.last().copied()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    /// The backing store is already in ascending order, so extraction is a
    /// move instead of the poll-and-reverse drain of the default impl.
    fn find_knn(&mut self, points: &PointSet, query: &[f32]) -> Vec<Neighbor> {
        for point in points {
            self.offer(Neighbor::new(
                point.label,
                squared_euclidean(&point.vector, query),
            ));
        }

        let mut result = std::mem::take(&mut self.entries);
        for neighbor in &mut result {
            neighbor.distance = neighbor.distance.sqrt();
        }
        result
    }
}
