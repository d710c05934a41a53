//! Clock decomposition of an aggregate runtime

use crate::{NANOS_PER_HOUR, NANOS_PER_MILLI, NANOS_PER_MINUTE, NANOS_PER_SECOND};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::fmt;

/// A nanosecond total split into hours, minutes, seconds and milliseconds.
///
/// Sub-millisecond remainder is dropped, so
/// `h·3.6e12 + m·6e10 + s·1e9 + ms·1e6 <= total < that + 1e6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBreakdown {
    /// Whole hours (unbounded)
    pub hours: BigUint,
    /// Minutes, `0..60`
    pub minutes: u8,
    /// Seconds, `0..60`
    pub seconds: u8,
    /// Milliseconds, `0..1000`
    pub millis: u16,
}

impl TimeBreakdown {
    /// Decompose a total by successive division and remainder
    pub fn from_nanos(total: &BigUint) -> Self {
        let hours = total / NANOS_PER_HOUR;
        let rest = (total % NANOS_PER_HOUR).to_u64().unwrap_or_default();

        Self {
            hours,
            minutes: (rest / NANOS_PER_MINUTE) as u8,
            seconds: (rest % NANOS_PER_MINUTE / NANOS_PER_SECOND) as u8,
            millis: (rest % NANOS_PER_SECOND / NANOS_PER_MILLI) as u16,
        }
    }

    /// Reassemble the decomposed total in nanoseconds
    pub fn to_nanos(&self) -> BigUint {
        &self.hours * NANOS_PER_HOUR
            + u64::from(self.minutes) * NANOS_PER_MINUTE
            + u64::from(self.seconds) * NANOS_PER_SECOND
            + u64::from(self.millis) * NANOS_PER_MILLI
    }
}

impl fmt::Display for TimeBreakdown {
    /// `HHHH:MM:SS.mmm`, hours right-aligned to four columns
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}:{:02}:{:02}.{:03}",
            self.hours.to_string(),
            self.minutes,
            self.seconds,
            self.millis
        )
    }
}
