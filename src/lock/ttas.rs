//! # TtasLock
//!
//! Test-and-Test-and-Set: waiters read the flag until it looks free and only then try the
//! compare-and-set, which keeps contended spinning off the exclusive cache-line path.

use core::hint::spin_loop;
use core::sync::atomic::{
    AtomicBool,
    Ordering::{Acquire, Relaxed, Release},
};

use super::RawLock;

/// Test-and-Test-and-Set lock.
///
/// Waiters spin on a plain load, which keeps the flag in a shared cache line, and only
/// issue the compare-and-set once that load reports the lock free.
#[derive(Debug)]
pub struct TtasLock {
    locked: AtomicBool,
}

impl TtasLock {
    /// Creates an unlocked lock.
    #[inline(always)]
    pub const fn new() -> Self {
        TtasLock {
            locked: AtomicBool::new(false),
        }
    }
}

impl Default for TtasLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for TtasLock {
    const NAME: &'static str = "TTAS Lock";

    #[inline]
    fn acquire(&self) {
        loop {
            // The probe only filters; the Acquire edge comes from the successful CAS.
            if !self.locked.load(Relaxed)
                && self
                    .locked
                    .compare_exchange_weak(false, true, Acquire, Relaxed)
                    .is_ok()
            {
                return;
            }
            spin_loop();
        }
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Acquire, Relaxed)
            .is_ok()
    }

    #[inline]
    fn release(&self) {
        self.locked.store(false, Release);
    }

    #[inline(always)]
    fn is_locked(&self) -> bool {
        self.locked.load(Relaxed)
    }
}
