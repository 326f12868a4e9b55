//! Integer-only latency statistics for deletion timings.

use std::time::Duration;

/// Sum divided by count, truncating toward zero. No overflow checking.
///
/// # Panics
/// Panics on an empty slice.
pub fn arithmetic_mean(values: &[u64]) -> u64 {
    let sum: u64 = values.iter().sum();
    sum / values.len() as u64
}

/// Median of `values`. The input is left untouched; a sorted copy is used.
/// For an even count the result is the truncated mean of the two middle values.
///
/// # Panics
/// Panics on an empty slice.
pub fn median(values: &[u64]) -> u64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 0 {
        let upper = n / 2;
        arithmetic_mean(&[sorted[upper - 1], sorted[upper]])
    } else {
        sorted[n / 2]
    }
}

/// Timing of one confirmed deletion plus the running figures over all
/// deletions recorded so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerfSample {
    pub elapsed: Duration,
    pub mean_ms: u64,
    pub median_ms: u64,
}

impl PerfSample {
    pub fn from_history(elapsed: Duration, history_ms: &[u64]) -> Self {
        Self {
            elapsed,
            mean_ms: arithmetic_mean(history_ms),
            median_ms: median(history_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Middle element, or the truncated mean of the two middle elements.
    fn sorted_middle(values: &[u64]) -> u64 {
        let mut sorted = values.to_vec();
        sorted.sort();
        let n = sorted.len();
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2
        }
    }

    proptest! {
        #[test]
        fn test_median_matches_sorted_middle(values in prop::collection::vec(0u64..1_000_000, 1..64)) {
            let before = values.clone();
            let got = median(&values);
            prop_assert_eq!(&values, &before);
            prop_assert_eq!(got, sorted_middle(&values));
        }

        #[test]
        fn test_median_lies_within_range(values in prop::collection::vec(0u64..1_000_000, 1..64)) {
            let got = median(&values);
            let min = *values.iter().min().unwrap();
            let max = *values.iter().max().unwrap();
            prop_assert!(min <= got && got <= max);
        }
    }

    #[test]
    fn test_arithmetic_mean() {
        assert_eq!(arithmetic_mean(&[1, 3]), 2);
    }

    #[test]
    fn test_arithmetic_mean_truncates() {
        assert_eq!(arithmetic_mean(&[1, 2]), 1);
        assert_eq!(arithmetic_mean(&[7]), 7);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[2, 1, 3]), 2);
        assert_eq!(median(&[9, 4, 100, 1, 5]), 5);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[10, 1, 4, 6]), 5);
        // (2 + 3) / 2 truncates
        assert_eq!(median(&[3, 2, 8, 1]), 2);
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let sample = vec![5, 1];
        assert_eq!(median(&sample), 3);
        assert_eq!(sample, vec![5, 1]);

        let sample = vec![30, 10, 20, 50, 40];
        let before = sample.clone();
        assert_eq!(median(&sample), 30);
        assert_eq!(sample, before);
    }

    #[test]
    #[should_panic]
    fn test_mean_of_empty_panics() {
        arithmetic_mean(&[]);
    }

    #[test]
    fn test_perf_sample_from_history() {
        let sample = PerfSample::from_history(Duration::from_millis(12), &[12, 4, 8]);
        assert_eq!(sample.mean_ms, 8);
        assert_eq!(sample.median_ms, 8);
        assert_eq!(sample.elapsed, Duration::from_millis(12));
    }
}
