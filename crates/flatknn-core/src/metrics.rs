//! Result-quality and timing metrics for search runs.
//!
//! [`recall_at_k`] verifies that two strategies retrieved the same
//! neighbors; [`LatencyStats`] summarizes per-query timings when comparing
//! strategies over a driver loop.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// Calculates Recall@k: the proportion of true neighbors found in the
/// results.
///
/// # Formula
///
/// `recall@k = |ground_truth ∩ results| / |ground_truth|`
///
/// Returns a value between 0.0 and 1.0; exact strategies searching the
/// same data must score 1.0 against each other. An empty `ground_truth`
/// yields 0.0 (avoids division by zero).
#[must_use]
pub fn recall_at_k<T: Eq + Hash + Copy>(ground_truth: &[T], results: &[T]) -> f64 {
    if ground_truth.is_empty() {
        return 0.0;
    }

    let truth_set: HashSet<T> = ground_truth.iter().copied().collect();
    let found = results.iter().filter(|id| truth_set.contains(id)).count();

    found as f64 / ground_truth.len() as f64
}

/// Per-query latency summary for a driver loop.
///
/// Record one sample per query, then read the aggregate statistics:
///
/// ```
/// use flatknn_core::metrics::LatencyStats;
/// use std::time::Duration;
///
/// let mut stats = LatencyStats::new();
/// stats.record(Duration::from_micros(120));
/// stats.record(Duration::from_micros(80));
/// assert_eq!(stats.count(), 2);
/// assert!(stats.p50() >= stats.min());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LatencyStats {
    samples: Vec<Duration>,
}

impl LatencyStats {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one query's latency.
    pub fn record(&mut self, sample: Duration) {
        self.samples.push(sample);
    }

    /// Number of recorded samples.
    #[must_use]
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Sum of all samples (total driver-loop time).
    #[must_use]
    pub fn total(&self) -> Duration {
        self.samples.iter().sum()
    }

    /// Arithmetic mean, or zero when no samples were recorded.
    #[must_use]
    pub fn mean(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        self.total() / self.samples.len() as u32
    }

    /// Smallest recorded sample.
    #[must_use]
    pub fn min(&self) -> Duration {
        self.samples.iter().min().copied().unwrap_or(Duration::ZERO)
    }

    /// Largest recorded sample.
    #[must_use]
    pub fn max(&self) -> Duration {
        self.samples.iter().max().copied().unwrap_or(Duration::ZERO)
    }

    /// Median latency.
    #[must_use]
    pub fn p50(&self) -> Duration {
        self.percentile(50.0)
    }

    /// 95th percentile latency.
    #[must_use]
    pub fn p95(&self) -> Duration {
        self.percentile(95.0)
    }

    /// 99th percentile latency.
    #[must_use]
    pub fn p99(&self) -> Duration {
        self.percentile(99.0)
    }

    /// Nearest-rank percentile over the recorded samples.
    #[must_use]
    pub fn percentile(&self, p: f64) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rank = ((p / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[rank.min(sorted.len() - 1)]
    }
}
