//! Sample collection in invocation order

use crate::WARMUP_DIVISOR;

/// Elapsed-time samples in nanoseconds, in the order they were measured.
///
/// The order matters: warm-up trimming drops a prefix, so samples are never
/// sorted in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    samples: Vec<u64>,
}

impl SampleSet {
    /// Empty set with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append one measurement
    pub fn push(&mut self, nanos: u64) {
        self.samples.push(nanos);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples were recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in measurement order
    pub fn as_slice(&self) -> &[u64] {
        &self.samples
    }

    /// Samples after dropping the first ⌊N/5⌋ as warm-up.
    ///
    /// Always keeps ⌈0.8·N⌉ samples and preserves their order.
    pub fn warm_trimmed(&self) -> &[u64] {
        &self.samples[self.samples.len() / WARMUP_DIVISOR..]
    }

    /// Consume the set, returning the raw samples
    pub fn into_vec(self) -> Vec<u64> {
        self.samples
    }
}

impl From<Vec<u64>> for SampleSet {
    fn from(samples: Vec<u64>) -> Self {
        Self { samples }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_length_is_ceil_of_eighty_percent() {
        for n in 0..200usize {
            let set: SampleSet = (0..n as u64).collect::<Vec<_>>().into();
            let expected = (4 * n).div_ceil(5);
            assert_eq!(set.warm_trimmed().len(), expected, "n = {n}");
        }
    }

    #[test]
    fn trimmed_is_suffix_in_original_order() {
        let set = SampleSet::from(vec![90, 10, 80, 20, 70, 30, 60, 40, 50, 0]);
        assert_eq!(set.warm_trimmed(), &[80, 20, 70, 30, 60, 40, 50, 0]);
    }

    #[test]
    fn small_sets_keep_everything() {
        let set = SampleSet::from(vec![3, 2, 1]);
        assert_eq!(set.warm_trimmed(), set.as_slice());
    }

    #[test]
    fn push_preserves_order() {
        let mut set = SampleSet::with_capacity(3);
        set.push(5);
        set.push(1);
        set.push(3);
        assert_eq!(set.len(), 3);
        assert_eq!(set.into_vec(), vec![5, 1, 3]);
    }
}
