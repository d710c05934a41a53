#![warn(missing_docs)]
//! SolveKit Statistical Engine
//!
//! Exact descriptive statistics over nanosecond runtime samples:
//! - Order statistics (min, quartiles, max) on the sorted samples
//! - Mean and population standard deviation with arbitrary-precision accumulation
//! - Aggregate runtime decomposed into a clock reading
//! - Warm-up trimming of the raw sample order

mod breakdown;
mod quartiles;
mod sample;
mod summary;

pub use breakdown::TimeBreakdown;
pub use quartiles::{EXACT_POSITION_TOLERANCE, Quartile, compute_quartile, quartile_position};
pub use sample::SampleSet;
pub use summary::Statistics;

/// Share of the leading samples treated as warm-up, as `1 / WARMUP_DIVISOR`
pub const WARMUP_DIVISOR: usize = 5;

/// Nanoseconds per hour
pub const NANOS_PER_HOUR: u64 = 3_600_000_000_000;

/// Nanoseconds per minute
pub const NANOS_PER_MINUTE: u64 = 60_000_000_000;

/// Nanoseconds per second
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Nanoseconds per millisecond
pub const NANOS_PER_MILLI: u64 = 1_000_000;
