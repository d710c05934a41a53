//! Statistics Computation
//!
//! Reduces one benchmark's samples twice: once over every run and once over
//! the warm-trimmed tail. The two reductions are independent and run on the
//! rayon pool with `join`.

use solvekit_stats::{SampleSet, Statistics};

/// Summaries for the full sample set and for the last 80% of it
#[derive(Debug, Clone)]
pub struct BenchmarkStatistics {
    /// Every iteration
    pub all: Statistics,
    /// Iterations after the warm-up fifth
    pub steady: Statistics,
}

/// Compute both summaries; `None` if there are no samples to summarize.
pub fn compute_statistics(samples: &SampleSet) -> Option<BenchmarkStatistics> {
    let (all, steady) = rayon::join(
        || Statistics::from_samples(samples.as_slice()),
        || Statistics::from_samples(samples.warm_trimmed()),
    );
    let stats = BenchmarkStatistics {
        all: all?,
        steady: steady?,
    };
    tracing::debug!(
        runs = stats.all.runs,
        steady_runs = stats.steady.runs,
        "computed statistics"
    );
    Some(stats)
}
