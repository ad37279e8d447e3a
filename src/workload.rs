//! # Workloads
//!
//! What each worker adds per step, over which integer range, and the closed-form
//! answer the run is checked against.

use std::fmt;

use crate::error::{HarnessError, Result};

/// The work distributed across the workers of one experiment.
///
/// Both variants walk the inclusive range `[start, end]`; they differ only in what
/// each step adds to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// Adds `1` per value: the expected result is the number of values.
    Increment { start: i64, end: i64 },
    /// Adds the value itself: the expected result is the arithmetic series.
    Sum { start: i64, end: i64 },
}

impl Workload {
    /// `n` increments, numbered `1..=n`.
    pub const fn increments(n: i64) -> Self {
        Workload::Increment { start: 1, end: n }
    }

    pub const fn sum(start: i64, end: i64) -> Self {
        Workload::Sum { start, end }
    }

    pub const fn start(&self) -> i64 {
        match *self {
            Workload::Increment { start, .. } | Workload::Sum { start, .. } => start,
        }
    }

    pub const fn end(&self) -> i64 {
        match *self {
            Workload::Increment { end, .. } | Workload::Sum { end, .. } => end,
        }
    }

    /// Number of values in the range. Zero when `start > end`, `None` for the full
    /// `i64` range, whose 2^64 values do not fit in a `u64`.
    pub fn len(&self) -> Option<u64> {
        if self.start() > self.end() {
            Some(0)
        } else {
            self.end().abs_diff(self.start()).checked_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start() > self.end()
    }

    /// Amount a worker adds to the accumulator when it processes `value`.
    #[inline(always)]
    pub const fn delta(&self, value: i64) -> i64 {
        match self {
            Workload::Increment { .. } => 1,
            Workload::Sum { .. } => value,
        }
    }

    /// The correct final accumulator value, computed without running anything.
    pub fn expected(&self) -> Result<i64> {
        let (start, end) = (self.start(), self.end());
        if start > end {
            return Err(HarnessError::EmptyRange { start, end });
        }

        let count = self.len().ok_or(HarnessError::RangeTooLarge { start, end })? as i128;
        let total = match self {
            Workload::Increment { .. } => count,
            // Gauss: n * (first + last) / 2, with the product always even.
            Workload::Sum { .. } => count * (start as i128 + end as i128) / 2,
        };

        i64::try_from(total).map_err(|_| HarnessError::Overflow { start, end })
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Workload::Increment { start, end } => {
                write!(f, "Counting integers from {start} to {end}")
            }
            Workload::Sum { start, end } => write!(f, "Summing integers from {start} to {end}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauss_sum_of_default_range() {
        let w = Workload::sum(1_000_000, 5_000_000);
        assert_eq!(w.len(), Some(4_000_001));
        assert_eq!(w.expected().unwrap(), 12_000_003_000_000);
    }

    #[test]
    fn test_matches_naive_sum() {
        for (start, end) in [(1, 1), (1, 10), (-5, 5), (-7, 3), (17, 4_000)] {
            let naive: i64 = (start..=end).sum();
            assert_eq!(Workload::sum(start, end).expected().unwrap(), naive);
        }
    }

    #[test]
    fn test_increment_counts_values() {
        assert_eq!(Workload::increments(10).expected().unwrap(), 10);
        assert_eq!(Workload::Increment { start: -3, end: 3 }.expected().unwrap(), 7);
        assert_eq!(Workload::increments(10).delta(7), 1);
        assert_eq!(Workload::sum(1, 10).delta(7), 7);
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let w = Workload::sum(10, 1);
        assert!(w.is_empty());
        assert!(matches!(w.expected(), Err(HarnessError::EmptyRange { start: 10, end: 1 })));
    }

    #[test]
    fn test_full_i64_range_is_rejected() {
        let w = Workload::increments(i64::MAX);
        assert_eq!(w.len(), Some(i64::MAX as u64));

        let w = Workload::Increment { start: i64::MIN, end: i64::MAX };
        assert_eq!(w.len(), None);
        assert!(!w.is_empty());
        assert!(matches!(w.expected(), Err(HarnessError::RangeTooLarge { .. })));
        assert!(matches!(
            Workload::sum(i64::MIN, i64::MAX).expected(),
            Err(HarnessError::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        let w = Workload::sum(1, i64::MAX / 2);
        assert!(matches!(w.expected(), Err(HarnessError::Overflow { .. })));
    }
}
