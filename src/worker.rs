//! # Worker Task
//!
//! The body each spawned thread runs: walk its partition and add one delta per
//! value, either inside a lock's critical section or with no protection at all.

use crate::accumulator::Accumulator;
use crate::lock::RawLock;
use crate::partition::Partition;
use crate::workload::Workload;

/// Adds every value of `partition` into `acc`, one critical section per value.
#[inline]
pub fn run_locked<L: RawLock>(
    lock: &L,
    acc: &Accumulator,
    partition: Partition,
    workload: &Workload,
) {
    for value in partition.values() {
        lock.acquire();
        acc.add(workload.delta(value));
        lock.release();
    }
}

/// The "No Lock" baseline: same mutations, no acquire/release. Updates may be lost.
#[inline]
pub fn run_unguarded(acc: &Accumulator, partition: Partition, workload: &Workload) {
    for value in partition.values() {
        acc.add(workload.delta(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::{TasLock, TtasLock};

    #[test]
    fn test_locked_single_worker() {
        let lock = TasLock::new();
        let acc = Accumulator::new();

        run_locked(&lock, &acc, Partition::new(1, 100), &Workload::sum(1, 100));

        assert_eq!(acc.get(), 5050);
        assert!(!lock.is_locked(), "Worker must leave the lock released");
    }

    #[test]
    fn test_increment_mode_adds_one_per_value() {
        let lock = TtasLock::new();
        let acc = Accumulator::new();

        run_locked(&lock, &acc, Partition::new(6, 5), &Workload::increments(10));

        assert_eq!(acc.get(), 5);
    }

    #[test]
    fn test_empty_partition_is_noop() {
        let acc = Accumulator::new();
        let lock = TasLock::new();

        run_unguarded(&acc, Partition::new(7, 0), &Workload::sum(1, 10));
        run_locked(&lock, &acc, Partition::new(7, 0), &Workload::sum(1, 10));

        assert_eq!(acc.get(), 0);
    }

    #[test]
    fn test_unguarded_single_worker_is_exact() {
        let acc = Accumulator::new();
        run_unguarded(&acc, Partition::new(1, 10), &Workload::sum(1, 10));
        assert_eq!(acc.get(), 55);
    }
}
