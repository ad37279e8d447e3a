//! # Work Partitioning
//!
//! Balanced split of an inclusive integer range into contiguous, disjoint pieces.
//!
//! With `total` values and `parts` pieces, every piece gets `total / parts` values
//! and the first `total % parts` pieces get one more. When there are more pieces
//! than values the surplus pieces are empty and their workers do nothing.

use std::ops::RangeInclusive;

use crate::error::{HarnessError, Result};
use crate::workload::Workload;

/// A contiguous slice of the workload assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    start: i64,
    len: u64,
}

impl Partition {
    pub const fn new(start: i64, len: u64) -> Self {
        Partition { start, len }
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn len(&self) -> u64 {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last value of the partition, or `None` when it is empty.
    pub fn end(&self) -> Option<i64> {
        if self.is_empty() {
            None
        } else {
            Some((self.start as i128 + self.len as i128 - 1) as i64)
        }
    }

    /// The values this partition covers, in ascending order.
    pub fn values(&self) -> RangeInclusive<i64> {
        match self.end() {
            Some(end) => self.start..=end,
            #[allow(clippy::reversed_empty_ranges)]
            None => 1..=0,
        }
    }
}

/// Splits `[start, end]` into `parts` balanced contiguous partitions.
pub fn partition(start: i64, end: i64, parts: usize) -> Result<Vec<Partition>> {
    if parts == 0 {
        return Err(HarnessError::NoThreads);
    }
    if start > end {
        return Err(HarnessError::EmptyRange { start, end });
    }

    let total = u64::try_from(end as i128 - start as i128 + 1)
        .map_err(|_| HarnessError::RangeTooLarge { start, end })?;
    let base = total / parts as u64;
    let remainder = total % parts as u64;

    let mut cursor = start as i128;
    let partitions = (0..parts as u64)
        .map(|i| {
            let len = base + u64::from(i < remainder);
            // Empty trailing partitions would otherwise point one past `end`.
            let part = Partition::new(cursor.min(end as i128) as i64, len);
            cursor += i128::from(len);
            part
        })
        .collect();

    Ok(partitions)
}

/// Splits a workload's range across `parts` workers.
pub fn partition_workload(workload: &Workload, parts: usize) -> Result<Vec<Partition>> {
    partition(workload.start(), workload.end(), parts)
}
