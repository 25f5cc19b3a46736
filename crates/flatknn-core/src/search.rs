//! Brute-force k-NN search drivers.
//!
//! One selector serves exactly one query: it is constructed with capacity
//! `k`, fed every candidate (the scan is exhaustive, never pruned), drained
//! in ascending distance order, and discarded. Queries share no mutable
//! state, which is what lets [`knn_search_batch`] fan them out over rayon
//! workers with zero coordination.

use crate::dataset::PointSet;
use crate::error::{Error, Result};
use crate::point::Neighbor;
use crate::selector::SelectorStrategy;
use rayon::prelude::*;

/// Finds the k nearest neighbors of `query` in `points` by exhaustive scan.
///
/// Returns neighbors in ascending Euclidean distance order, length
/// `min(k, points.len())`. Fewer candidates than `k` is not an error;
/// callers must handle the short result.
///
/// # Errors
///
/// Returns [`Error::InvalidCapacity`] if `k` is zero, or
/// [`Error::DimensionMismatch`] if the query dimension disagrees with the
/// candidate set. A mismatch aborts the whole query's selection before any
/// scanning: it signals a corrupted dataset.
pub fn knn_search(
    points: &PointSet,
    query: &[f32],
    k: usize,
    strategy: SelectorStrategy,
) -> Result<Vec<Neighbor>> {
    if k == 0 {
        return Err(Error::InvalidCapacity(k));
    }
    if query.len() != points.dimension() {
        return Err(Error::DimensionMismatch {
            expected: points.dimension(),
            actual: query.len(),
        });
    }

    tracing::trace!(
        candidates = points.len(),
        k,
        strategy = %strategy,
        "scanning candidate set"
    );

    let mut selector = strategy.build(k)?;
    Ok(selector.find_knn(points, query))
}

/// Finds the k nearest neighbors for every query in `queries`, processing
/// queries in parallel.
///
/// Each worker owns a private selector, so queries need no coordination.
/// Results are in query order; each entry follows the [`knn_search`]
/// contract.
///
/// # Errors
///
/// Returns [`Error::InvalidCapacity`] if `k` is zero, or
/// [`Error::DimensionMismatch`] if the query batch dimension disagrees
/// with the candidate set. Dimensions are validated up front; no query is
/// scanned on a mismatched batch.
pub fn knn_search_batch(
    points: &PointSet,
    queries: &PointSet,
    k: usize,
    strategy: SelectorStrategy,
) -> Result<Vec<Vec<Neighbor>>> {
    if k == 0 {
        return Err(Error::InvalidCapacity(k));
    }
    if queries.dimension() != points.dimension() {
        return Err(Error::DimensionMismatch {
            expected: points.dimension(),
            actual: queries.dimension(),
        });
    }

    tracing::debug!(
        candidates = points.len(),
        queries = queries.len(),
        k,
        strategy = %strategy,
        "batch k-NN scan"
    );

    queries
        .points()
        .par_iter()
        .map(|query| {
            let mut selector = strategy.build(k)?;
            Ok(selector.find_knn(points, &query.vector))
        })
        .collect()
}
