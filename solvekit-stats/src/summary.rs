//! Summary Statistics
//!
//! Everything is computed on a sorted copy of the samples. Sums that could
//! exceed 64 bits (the total and the sum of squared deviations) are accumulated
//! in [`BigUint`], and the standard deviation uses an exact integer square root.
//! Results that are not whole nanoseconds are truncated.

use crate::breakdown::TimeBreakdown;
use crate::quartiles::{Quartile, compute_quartile};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Summary of one sample set, all times in nanoseconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Number of samples
    pub runs: usize,
    /// `total / runs`, truncated
    pub mean: u64,
    /// Smallest sample
    pub min: u64,
    /// First quartile
    pub q1: u64,
    /// Second quartile
    pub median: u64,
    /// Third quartile
    pub q3: u64,
    /// Largest sample
    pub max: u64,
    /// Population standard deviation, truncated
    pub std_dev: u64,
    /// Exact sum of all samples
    pub total: BigUint,
    /// `total` as a clock reading
    pub breakdown: TimeBreakdown,
}

impl Statistics {
    /// Summarize `samples`; returns `None` when there are none.
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let runs = sorted.len();
        let n = runs as u64;

        let total: BigUint = sorted.iter().map(|&x| BigUint::from(x)).sum();
        // The mean of u64 values always fits in u64.
        let mean = (&total / n).to_u64().unwrap_or(u64::MAX);

        let squared_deviations: BigUint = sorted
            .iter()
            .map(|&x| {
                let d = BigUint::from(x.abs_diff(mean));
                &d * &d
            })
            .sum();
        let std_dev = (squared_deviations / n)
            .sqrt()
            .to_u64()
            .unwrap_or(u64::MAX);

        let breakdown = TimeBreakdown::from_nanos(&total);

        Some(Self {
            runs,
            mean,
            min: sorted[0],
            q1: compute_quartile(&sorted, Quartile::First),
            median: compute_quartile(&sorted, Quartile::Second),
            q3: compute_quartile(&sorted, Quartile::Third),
            max: sorted[runs - 1],
            std_dev,
            total,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_sample_example() {
        let stats = Statistics::from_samples(&[300, 100, 500, 200, 400]).unwrap();
        assert_eq!(stats.runs, 5);
        assert_eq!(stats.min, 100);
        assert_eq!(stats.max, 500);
        assert_eq!(stats.mean, 300);
        // Positions 0.5 and 3.5 fall between samples.
        assert_eq!(stats.q1, 150);
        assert_eq!(stats.median, 300);
        assert_eq!(stats.q3, 450);
        // floor(sqrt(20000))
        assert_eq!(stats.std_dev, 141);
        assert_eq!(stats.total, BigUint::from(1500u32));
    }

    #[test]
    fn constant_samples_have_no_spread() {
        let stats = Statistics::from_samples(&[10, 10, 10, 10]).unwrap();
        assert_eq!(stats.std_dev, 0);
        assert_eq!(stats.mean, 10);
        assert_eq!(stats.q1, 10);
        assert_eq!(stats.q3, 10);
    }

    #[test]
    fn empty_input_has_no_summary() {
        assert!(Statistics::from_samples(&[]).is_none());
    }

    #[test]
    fn mean_truncates() {
        let stats = Statistics::from_samples(&[1, 1, 2]).unwrap();
        assert_eq!(stats.mean, 1);
    }

    #[test]
    fn total_exceeds_u64() {
        let samples = vec![u64::MAX; 4];
        let stats = Statistics::from_samples(&samples).unwrap();
        assert_eq!(stats.total, BigUint::from(u64::MAX) * 4u32);
        assert_eq!(stats.mean, u64::MAX);
        assert_eq!(stats.std_dev, 0);
    }

    #[test]
    fn std_dev_of_extremes_does_not_overflow() {
        let stats = Statistics::from_samples(&[0, u64::MAX]).unwrap();
        // mean = floor(MAX / 2); deviations are mean and mean + 1
        assert_eq!(stats.std_dev, u64::MAX / 2);
    }

    #[test]
    fn breakdown_matches_total() {
        let samples = vec![1_500_000_000; 3000];
        let stats = Statistics::from_samples(&samples).unwrap();
        assert_eq!(stats.breakdown.to_string(), "   1:15:00.000");
        assert_eq!(stats.breakdown.to_nanos(), stats.total);
    }

    #[test]
    fn order_statistics_are_bounded() {
        let samples: Vec<u64> = (0..97).map(|i| (i * 7919) % 1013).collect();
        let s = Statistics::from_samples(&samples).unwrap();
        assert!(s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max);
        assert!(s.min <= s.mean && s.mean <= s.max);
    }
}
