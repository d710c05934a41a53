//! Unit Conversion
//!
//! Fixed-point rendering of nanosecond values in larger units.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use solvekit_stats::{NANOS_PER_MILLI, NANOS_PER_SECOND};

const NANOS_PER_MICRO: u64 = 1_000;

/// Render `nanos` in a unit of `unit_nanos` with `decimals` fractional digits.
///
/// Rounds half up. `unit_nanos` must be a multiple of `10^decimals`.
pub fn fixed_point(nanos: &BigUint, unit_nanos: u64, decimals: u32) -> String {
    let scale = 10u64.pow(decimals);
    let step = (unit_nanos / scale).max(1);
    let scaled: BigUint = (nanos + step / 2) / step;

    let whole = &scaled / scale;
    if decimals == 0 {
        return whole.to_string();
    }
    let frac = (&scaled % scale).to_u64().unwrap_or_default();
    format!("{whole}.{frac:0width$}", width = decimals as usize)
}

/// Milliseconds with three decimals
pub fn format_millis(nanos: u64) -> String {
    fixed_point(&BigUint::from(nanos), NANOS_PER_MILLI, 3)
}

/// Microseconds with one decimal
pub fn format_micros(nanos: u64) -> String {
    fixed_point(&BigUint::from(nanos), NANOS_PER_MICRO, 1)
}

/// Seconds with three decimals
pub fn format_seconds(nanos: &BigUint) -> String {
    fixed_point(nanos, NANOS_PER_SECOND, 3)
}
