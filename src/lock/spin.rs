//! # SpinLock
//!
//! The plainest lock in the crate: one flag set with `fetch_or` until it was clear.

use core::hint::spin_loop;
use core::sync::atomic::{
    AtomicBool,
    Ordering::{Acquire, Relaxed, Release},
};

use super::RawLock;

/// The plainest busy-wait lock: one flag, one atomic set-and-read, no backoff.
///
/// `acquire` keeps OR-ing `true` into the flag until the value it read back was `false`.
#[derive(Debug)]
pub struct SpinLock {
    locked: AtomicBool,
}

impl SpinLock {
    /// Creates an unlocked lock.
    #[inline(always)]
    pub const fn new() -> Self {
        SpinLock {
            locked: AtomicBool::new(false),
        }
    }
}

impl Default for SpinLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for SpinLock {
    const NAME: &'static str = "Spin Lock";

    #[inline]
    fn acquire(&self) {
        while self.locked.fetch_or(true, Acquire) {
            spin_loop();
        }
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        !self.locked.fetch_or(true, Acquire)
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
    use super::SpinLock;
    use crate::lock::tests;

    #[test]
    fn test_try_acquire() {
        tests::assert_try_acquire_semantics::<SpinLock>();
    }

    #[test]
    fn test_mutual_exclusion() {
        tests::assert_mutual_exclusion::<SpinLock>(8, 10_000);
    }
}
