//! # Locks
//!
//! Four busy-wait mutual-exclusion primitives, each built on a single [`AtomicBool`]
//! that is `true` while the lock is held.
//!
//! | Lock            | Acquire loop                                                   |
//! |-----------------|----------------------------------------------------------------|
//! | [`SpinLock`]    | `fetch_or(true, Acquire)` until the previous value was `false` |
//! | [`TasLock`]     | `swap(true, Acquire)` until the previous value was `false`     |
//! | [`TtasLock`]    | relaxed `load` probe, then `compare_exchange_weak`             |
//! | [`BackoffLock`] | TTAS plus a capped exponential [`BackOff`] after each failure  |
//!
//! Every release is a `store(false, Release)`, which pairs with the acquiring
//! read-modify-write so the critical section of one holder happens-before the
//! critical section of the next.
//!
//! The locks provide mutual exclusion only: no fairness, no FIFO order among waiters,
//! no bound on waiting time, and no reentrancy. A holder that is preempted stalls
//! every waiter until it runs again.
//!
//! [`AtomicBool`]: core::sync::atomic::AtomicBool
//! [`BackOff`]: crate::BackOff

use core::fmt;

mod backoff_lock;
mod spin;
mod tas;
mod ttas;

pub use backoff_lock::BackoffLock;
pub use spin::SpinLock;
pub use tas::TasLock;
pub use ttas::TtasLock;

/// The capability shared by every lock in this crate.
///
/// `release` must only be called by the worker that currently holds the lock, and only once
/// per successful `acquire`/`try_acquire`. Breaking that contract breaks mutual exclusion
/// for whatever the lock guards; [`Guarded`](crate::Guarded) enforces it with a guard.
pub trait RawLock: Default + Send + Sync {
    /// Human-readable name used in reports.
    const NAME: &'static str;

    /// Spins until the calling worker owns the lock.
    fn acquire(&self);

    /// Attempts a single acquisition. Returns `true` when the lock was obtained.
    fn try_acquire(&self) -> bool;

    /// Relinquishes ownership.
    fn release(&self);

    /// Returns whether the lock is currently held by someone.
    fn is_locked(&self) -> bool;
}

/// Selector for one of the four lock implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockKind {
    /// [`SpinLock`]
    Spin,
    /// [`TasLock`]
    Tas,
    /// [`TtasLock`]
    Ttas,
    /// [`BackoffLock`]
    Backoff,
}

impl LockKind {
    /// Every lock kind, in report order.
    pub const ALL: [LockKind; 4] = [
        LockKind::Tas,
        LockKind::Ttas,
        LockKind::Backoff,
        LockKind::Spin,
    ];

    /// Name of the lock as printed in reports.
    pub const fn name(self) -> &'static str {
        match self {
            LockKind::Spin => SpinLock::NAME,
            LockKind::Tas => TasLock::NAME,
            LockKind::Ttas => TtasLock::NAME,
            LockKind::Backoff => BackoffLock::NAME,
        }
    }
}

impl fmt::Display for LockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
