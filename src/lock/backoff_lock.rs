//! # BackoffLock
//!
//! A [`TtasLock`](super::TtasLock) whose waiters pause between attempts with a
//! [`BackOff`](crate::BackOff): 1, 2, 4, ... spin iterations, capped at 1024 and
//! restarted on every `acquire`.

use core::sync::atomic::{
    AtomicBool,
    Ordering::{Acquire, Relaxed, Release},
};

use super::RawLock;
use crate::BackOff;

/// TTAS lock that backs off exponentially after every failed attempt.
///
/// The delay starts at one spin iteration and doubles up to
/// [`MAX_DELAY`](crate::backoff::MAX_DELAY). The [`BackOff`] lives on the stack of
/// each `acquire` call, so a new acquisition always starts from the shortest delay.
#[derive(Debug)]
pub struct BackoffLock {
    locked: AtomicBool,
}

impl BackoffLock {
    /// Creates an unlocked lock.
    #[inline(always)]
    pub const fn new() -> Self {
        BackoffLock {
            locked: AtomicBool::new(false),
        }
    }

    /// The acquire loop, reporting the delay of every backoff before it is taken.
    #[inline(always)]
    fn acquire_with(&self, mut on_backoff: impl FnMut(u32)) {
        let backoff = BackOff::new();

        loop {
            if !self.locked.load(Relaxed)
                && self
                    .locked
                    .compare_exchange_weak(false, true, Acquire, Relaxed)
                    .is_ok()
            {
                return;
            }

            on_backoff(backoff.current());
            backoff.wait();
        }
    }
}

impl Default for BackoffLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for BackoffLock {
    const NAME: &'static str = "Backoff Lock";

    #[inline]
    fn acquire(&self) {
        self.acquire_with(|_| {});
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

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::BackoffLock;
    use crate::backoff::MAX_DELAY;
    use crate::lock::{tests, RawLock};
    use std::sync::atomic::{AtomicUsize, Ordering::SeqCst};
    use std::sync::Mutex;
    use std::thread;

    /// Holds the lock while a second thread spins on it, lets it observe `waits` backoffs,
    /// then releases and returns the delays the waiter reported.
    fn contended_delays(lock: &BackoffLock, waits: usize) -> Vec<u32> {
        let delays = Mutex::new(Vec::new());
        let seen = AtomicUsize::new(0);

        lock.acquire();
        thread::scope(|s| {
            s.spawn(|| {
                lock.acquire_with(|delay| {
                    delays.lock().unwrap().push(delay);
                    seen.fetch_add(1, SeqCst);
                });
                lock.release();
            });

            while seen.load(SeqCst) < waits {
                thread::yield_now();
            }
            lock.release();
        });

        delays.into_inner().unwrap()
    }

    #[test]
    fn test_try_acquire() {
        tests::assert_try_acquire_semantics::<BackoffLock>();
    }

    #[test]
    fn test_mutual_exclusion() {
        tests::assert_mutual_exclusion::<BackoffLock>(8, 10_000);
    }

    #[test]
    fn test_delay_doubles_up_to_cap() {
        let lock = BackoffLock::new();
        let delays = contended_delays(&lock, 14);

        assert!(delays.len() >= 14);
        assert_eq!(
            &delays[..14],
            &[1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 1024, 1024, 1024]
        );
        assert!(delays.iter().all(|&d| d <= MAX_DELAY));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_delay_resets_per_acquire() {
        let lock = BackoffLock::new();

        let first = contended_delays(&lock, 12);
        assert_eq!(*first.last().unwrap(), MAX_DELAY);

        let second = contended_delays(&lock, 3);
        assert_eq!(&second[..3], &[1, 2, 4], "Backoff state leaked across acquisitions");
    }

    #[test]
    fn test_uncontended_acquire_barely_backs_off() {
        let lock = BackoffLock::new();

        for _ in 0..100 {
            let mut delays = Vec::new();
            lock.acquire_with(|delay| delays.push(delay));
            lock.release();

            // A weak CAS may fail spuriously on LL/SC targets, so allow the odd retry,
            // but each one must start from the shortest delay.
            let expected: Vec<u32> = (0..delays.len() as u32).map(|i| 1 << i).collect();
            assert_eq!(delays, expected);
            assert!(delays.len() <= 2, "uncontended acquire backed off {delays:?}");
        }
        assert!(!lock.is_locked());
    }
}
