//! # TasLock
//!
//! Test-and-Set: acquisition is an unconditional `swap(true, Acquire)`, retried until the
//! previous value was `false`.

use core::sync::atomic::{
    AtomicBool,
    Ordering::{Acquire, Relaxed, Release},
};

use super::RawLock;

/// Test-and-Set lock.
///
/// Every attempt is an unconditional exchange of `true` into the flag, so each waiting
/// worker keeps pulling the cache line into exclusive state while it spins.
#[derive(Debug)]
pub struct TasLock {
    locked: AtomicBool,
}

impl TasLock {
    /// Creates an unlocked lock.
    #[inline(always)]
    pub const fn new() -> Self {
        TasLock {
            locked: AtomicBool::new(false),
        }
    }
}

impl Default for TasLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for TasLock {
    const NAME: &'static str = "TAS Lock";

    #[inline]
    fn acquire(&self) {
        while self.locked.swap(true, Acquire) {}
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        !self.locked.swap(true, Acquire)
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

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::TasLock;
    use crate::lock::{tests, RawLock};

    #[test]
    fn test_try_acquire() {
        tests::assert_try_acquire_semantics::<TasLock>();
    }

    #[test]
    fn test_mutual_exclusion() {
        tests::assert_mutual_exclusion::<TasLock>(8, 10_000);
    }

    #[test]
    fn test_release_then_reacquire() {
        let lock = TasLock::new();
        for _ in 0..100 {
            lock.acquire();
            assert!(lock.is_locked());
            lock.release();
        }
        assert!(!lock.is_locked());
    }
}
