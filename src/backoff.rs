//! # BackOff
//!
//! The capped exponential delay used by [`BackoffLock`](crate::lock::BackoffLock).
//!
//! Every call to [`BackOff::wait`] busy-waits for [`BackOff::current`] iterations of
//! [`core::hint::spin_loop`] and then doubles the delay, saturating at [`MAX_DELAY`].
//! A fresh [`BackOff`] always starts at [`START_DELAY`], so a lock that builds one per
//! `acquire` call never carries contention history from one acquisition to the next.
//!
//! The wait never yields or sleeps. Handing the CPU back to the scheduler would change
//! what the harness measures.
//!
//! ## Example
//! ```rust
//! use spinlock_bench::BackOff;
//!
//! let backoff = BackOff::new();
//! assert_eq!(backoff.current(), 1);
//!
//! backoff.wait();
//! backoff.wait();
//! assert_eq!(backoff.current(), 4);
//!
//! backoff.reset();
//! assert_eq!(backoff.current(), 1);
//! ```

use core::{cell::Cell, hint::spin_loop};

/// Upper bound on the delay, in spin iterations.
pub const MAX_DELAY: u32 = 1 << 10;

/// Delay of the first wait after a reset.
pub const START_DELAY: u32 = 1;

/// A capped exponential backoff counter.
///
/// Uses a [`Cell`] so a backoff can be kept on the stack of a single `acquire` call
/// and advanced through a shared reference. It is intentionally `!Sync`.
#[derive(Debug)]
pub struct BackOff {
    delay: Cell<u32>,
}

impl BackOff {
    /// Creates a backoff whose first wait lasts [`START_DELAY`] iterations.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            delay: Cell::new(START_DELAY),
        }
    }

    /// Spins for the current delay, then doubles it up to [`MAX_DELAY`].
    #[inline]
    pub fn wait(&self) {
        let end = self.delay.get();

        for _ in 0..end {
            spin_loop();
        }

        self.delay.set((end << 1).min(MAX_DELAY));
    }

    /// Returns the number of iterations the next [`wait`](BackOff::wait) will spin for.
    #[inline(always)]
    pub fn current(&self) -> u32 {
        self.delay.get()
    }

    /// Restores the delay to [`START_DELAY`].
    #[inline(always)]
    pub fn reset(&self) {
        self.delay.set(START_DELAY);
    }
}

impl Default for BackOff {
    fn default() -> Self {
        Self::new()
    }
}
