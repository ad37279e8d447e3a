//! # Benchmark Configuration
//!
//! Compile-time defaults for the sweep: the summation range and the thread
//! counts. The binary takes no runtime arguments.

use crate::error::{HarnessError, Result};
use crate::lock::LockKind;
use crate::workload::Workload;

/// First integer of the default summation range.
pub const START_NUM: i64 = 1_000_000;

/// Last integer (inclusive) of the default summation range.
pub const END_NUM: i64 = 5_000_000;

/// Thread counts swept by default.
pub const THREAD_COUNTS: [usize; 5] = [2, 4, 8, 16, 32];

/// The three locks of the classic TAS/TTAS/Backoff comparison.
pub const CLASSIC_LOCKS: [LockKind; 3] = [LockKind::Tas, LockKind::Ttas, LockKind::Backoff];

/// Sweep configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Workload every experiment runs
    pub workload: Workload,
    /// Thread counts, in the order they are run
    pub thread_counts: Vec<usize>,
    /// Locks run for every thread count, after the baseline
    pub locks: Vec<LockKind>,
    /// Run the unprotected "No Lock" baseline first
    pub include_unguarded: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            workload: Workload::sum(START_NUM, END_NUM),
            thread_counts: THREAD_COUNTS.to_vec(),
            locks: LockKind::ALL.to_vec(),
            include_unguarded: true,
        }
    }
}

impl BenchConfig {
    /// Small workload for smoke runs and tests
    pub fn quick() -> Self {
        Self {
            workload: Workload::sum(1, 10_000),
            thread_counts: vec![2, 4],
            ..Default::default()
        }
    }

    /// The classic comparison: baseline, TAS, TTAS and Backoff over the default range
    pub fn classic() -> Self {
        Self {
            locks: CLASSIC_LOCKS.to_vec(),
            ..Default::default()
        }
    }

    /// Checks that the configuration can run at all.
    pub fn validate(&self) -> Result<()> {
        if self.thread_counts.is_empty() {
            return Err(HarnessError::EmptySweep);
        }
        if self.thread_counts.contains(&0) {
            return Err(HarnessError::NoThreads);
        }
        self.workload.expected().map(|_| ())
    }
}
