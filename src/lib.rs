//! # spinlock-bench 🌀
//!
//! A micro-benchmark harness that measures how busy-wait locks behave under
//! contention. N workers add a fixed range of integers into one shared 64-bit
//! accumulator, one critical section per integer, and the final value is checked
//! against the closed-form answer.
//!
//! The crate includes:
//!
//! - [`RawLock`] — the `acquire`/`release` capability, implemented by
//!   [`SpinLock`], [`TasLock`], [`TtasLock`] and [`BackoffLock`].
//! - [`BackOff`] — the capped exponential delay behind [`BackoffLock`].
//! - [`Guarded`] — a value reachable only through a held lock (RAII release).
//! - The harness (`std` only): [`Workload`], [`partition`](partition::partition),
//!   [`Experiment`], [`Sweep`], [`BenchConfig`].
//!
//! ## ✨ Features
//!
//! - ✅ Lock primitives, [`BackOff`] and [`Guarded`] are `no_std` compatible (uses `core` only)
//! - ⚙️ `std` feature (default) enables the threaded harness, errors and logging
//! - 🧪 An unprotected "No Lock" baseline that loses updates without undefined behaviour
//!
//! ## 🚀 Quick Example
//!
//! ```rust
//! use spinlock_bench::{Experiment, LockKind, Workload};
//!
//! let report = Experiment::locked(LockKind::Ttas, 2, Workload::increments(10))
//!     .run()
//!     .unwrap();
//! assert_eq!(report.measured, 10);
//! assert!(report.is_correct());
//! ```
//!
//! ## 🧠 Design
//!
//! Every lock is a single [`AtomicBool`](core::sync::atomic::AtomicBool). Acquisition
//! uses `Acquire` ordering on the read-modify-write that takes the lock, release is a
//! `Release` store, so each critical section happens-before the next one.
//!
//! Each [`Experiment`] owns a fresh lock and a fresh [`Accumulator`] for exactly one
//! run; workers are scoped threads that borrow both and are joined before the result
//! is read.
//!
//! ## ⚠️ Safety & Usage Notes
//!
//! - The locks busy-wait. They are not fair, not reentrant, and a preempted holder
//!   stalls every waiter.
//! - [`RawLock::release`] must only be called by the current holder; prefer [`Guarded`]
//!   outside the benchmark.
//!
//! ## 📦 Modules
//!
//! - [`backoff`] — Capped exponential backoff.
//! - [`lock`] — The four lock implementations.
//! - [`guarded`] — Lock-protected value wrapper.
//! - `accumulator`, `workload`, `partition`, `worker`, `runner`, `sweep`, `config`,
//!   `error`, `logging` — the harness (`std`).

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod backoff;
pub mod guarded;
pub mod lock;

#[cfg(feature = "std")]
pub mod accumulator;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod error;
#[cfg(feature = "std")]
pub mod logging;
#[cfg(feature = "std")]
pub mod partition;
#[cfg(feature = "std")]
pub mod runner;
#[cfg(feature = "std")]
pub mod sweep;
#[cfg(feature = "std")]
pub mod worker;
#[cfg(feature = "std")]
pub mod workload;

pub use backoff::BackOff;
pub use guarded::{Guarded, GuardedRef};
pub use lock::{BackoffLock, LockKind, RawLock, SpinLock, TasLock, TtasLock};

#[cfg(feature = "std")]
pub use accumulator::Accumulator;
#[cfg(feature = "std")]
pub use config::BenchConfig;
#[cfg(feature = "std")]
pub use error::{HarnessError, Result};
#[cfg(feature = "std")]
pub use logging::init_tracing;
#[cfg(feature = "std")]
pub use runner::{Experiment, ExperimentReport};
#[cfg(feature = "std")]
pub use sweep::{Sweep, SweepSummary};
#[cfg(feature = "std")]
pub use workload::Workload;
