//! Quartile Computation
//!
//! Quartiles use the 1-indexed position `(N + 1) · k/4`, shifted to 0-indexing.
//! When the position lands within [`EXACT_POSITION_TOLERANCE`] above a whole
//! index the element at that index is taken as is; otherwise the two neighbours
//! are averaged with integer truncation.

/// Fractional part below which a quartile position counts as a whole index.
///
/// Positions can only have fractional parts of 0, 0.25, 0.5 or 0.75, so any
/// value in (0, 0.25] gives the same results.
pub const EXACT_POSITION_TOLERANCE: f64 = 0.1;

/// Which quartile to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quartile {
    /// 25th percentile
    First = 1,
    /// Median
    Second = 2,
    /// 75th percentile
    Third = 3,
}

/// Zero-indexed position of a quartile in a sorted set of `n` samples
pub fn quartile_position(n: usize, quartile: Quartile) -> f64 {
    (n as f64 + 1.0) * (quartile as u8 as f64 / 4.0) - 1.0
}

/// Compute a quartile from ascending-sorted samples.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn compute_quartile(sorted: &[u64], quartile: Quartile) -> u64 {
    let pos = quartile_position(sorted.len(), quartile);
    // Truncation toward zero; positions for N < 3 can be slightly negative.
    let base = pos.trunc();
    let idx = base as usize;

    if pos - base < EXACT_POSITION_TOLERANCE {
        sorted[idx]
    } else {
        let upper = (idx + 1).min(sorted.len() - 1);
        ((sorted[idx] as u128 + sorted[upper] as u128) / 2) as u64
    }
}
