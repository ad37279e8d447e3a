//! # Experiment Runner
//!
//! One experiment = one fresh lock, one fresh accumulator, `threads` scoped workers
//! over a balanced partition of the workload, a wall-clock measurement and a
//! comparison against the closed-form expected value.
//!
//! All state is owned by the run itself, so nothing survives from one experiment to
//! the next and no reset step is needed.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::accumulator::Accumulator;
use crate::error::{HarnessError, Result};
use crate::lock::{BackoffLock, LockKind, RawLock, SpinLock, TasLock, TtasLock};
use crate::partition::partition_workload;
use crate::worker;
use crate::workload::Workload;

/// Report label of the unprotected baseline.
pub const NO_LOCK_LABEL: &str = "No Lock";

/// Parameters of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experiment {
    /// Lock to construct. Still built, but never touched, when `use_lock` is false.
    pub lock: LockKind,
    pub threads: usize,
    pub workload: Workload,
    pub use_lock: bool,
}

impl Experiment {
    /// An experiment whose workers go through `lock` for every mutation.
    pub const fn locked(lock: LockKind, threads: usize, workload: Workload) -> Self {
        Experiment {
            lock,
            threads,
            workload,
            use_lock: true,
        }
    }

    /// The "No Lock" baseline.
    pub const fn unguarded(threads: usize, workload: Workload) -> Self {
        Experiment {
            lock: LockKind::Tas,
            threads,
            workload,
            use_lock: false,
        }
    }

    pub const fn label(&self) -> &'static str {
        if self.use_lock {
            self.lock.name()
        } else {
            NO_LOCK_LABEL
        }
    }

    /// Runs the experiment with the lock type selected by [`Experiment::lock`].
    pub fn run(&self) -> Result<ExperimentReport> {
        match self.lock {
            LockKind::Spin => self.run_with::<SpinLock>(),
            LockKind::Tas => self.run_with::<TasLock>(),
            LockKind::Ttas => self.run_with::<TtasLock>(),
            LockKind::Backoff => self.run_with::<BackoffLock>(),
        }
    }

    /// Runs the experiment with an explicit lock type, ignoring [`Experiment::lock`].
    #[instrument(level = "debug", skip(self), fields(label = self.label(), threads = self.threads))]
    pub fn run_with<L: RawLock>(&self) -> Result<ExperimentReport> {
        if self.threads == 0 {
            return Err(HarnessError::NoThreads);
        }
        let expected = self.workload.expected()?;
        let partitions = partition_workload(&self.workload, self.threads)?;

        let lock = L::default();
        let acc = Accumulator::new();
        let use_lock = self.use_lock;

        let started = Instant::now();
        thread::scope(|s| -> Result<()> {
            let handles = partitions
                .iter()
                .enumerate()
                .map(|(index, &part)| {
                    let (lock, acc, workload) = (&lock, &acc, &self.workload);
                    debug!(index, start = part.start(), len = part.len(), "spawning worker");
                    thread::Builder::new()
                        .name(format!("worker-{index}"))
                        .spawn_scoped(s, move || {
                            if use_lock {
                                worker::run_locked(lock, acc, part, workload)
                            } else {
                                worker::run_unguarded(acc, part, workload)
                            }
                        })
                        .map_err(|source| HarnessError::Spawn { index, source })
                })
                .collect::<Result<Vec<_>>>()?;

            let mut outcome = Ok(());
            for (index, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() && outcome.is_ok() {
                    outcome = Err(HarnessError::WorkerPanicked { index });
                }
            }
            outcome
        })?;
        let elapsed = started.elapsed();

        let measured = acc.into_inner();
        debug!(measured, expected, ?elapsed, "workers joined");

        Ok(ExperimentReport {
            label: self.label(),
            locked: self.use_lock,
            threads: self.threads,
            workload: self.workload,
            elapsed,
            measured,
            expected,
        })
    }
}

/// Outcome of one experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentReport {
    pub label: &'static str,
    /// Whether the workers went through a lock.
    pub locked: bool,
    pub threads: usize,
    pub workload: Workload,
    pub elapsed: Duration,
    pub measured: i64,
    pub expected: i64,
}

impl ExperimentReport {
    pub fn is_correct(&self) -> bool {
        self.measured == self.expected
    }

    /// Absolute distance between the measured and expected values.
    pub fn deviation(&self) -> u64 {
        self.measured.abs_diff(self.expected)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = match self.workload {
            Workload::Increment { .. } => "Final Count",
            Workload::Sum { .. } => "Final Sum",
        };

        write!(
            f,
            "{} ({} threads): Time = {:.3} ms, {} = {}",
            self.label,
            self.threads,
            self.elapsed_ms(),
            quantity,
            self.measured
        )?;

        if self.is_correct() {
            f.write_str(" (Correct)")
        } else {
            write!(f, " (Incorrect), Error = {}", self.deviation())
        }
    }
}
