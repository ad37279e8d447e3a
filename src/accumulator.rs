//! # Accumulator
//!
//! The shared 64-bit counter every worker of one experiment adds into.
//!
//! [`Accumulator::add`] is deliberately *not* an atomic read-modify-write. It is a relaxed
//! load followed by a relaxed store, which is exactly the `counter += v` of a plain integer
//! but without undefined behaviour when nobody synchronises it. Two unguarded workers that
//! interleave between the load and the store lose one of the updates, which is the race the
//! "No Lock" baseline exists to show. Under any of the locks the acquire/release pair orders
//! every load after the previous holder's store, so the total is exact.

use std::sync::atomic::{AtomicI64, Ordering::Relaxed};

/// A shared counter. Starts at zero by construction.
#[derive(Debug, Default)]
pub struct Accumulator {
    value: AtomicI64,
}

impl Accumulator {
    pub const fn new() -> Self {
        Accumulator {
            value: AtomicI64::new(0),
        }
    }

    /// `value += delta` as a separate read and write. Wraps on overflow.
    #[inline(always)]
    pub fn add(&self, delta: i64) {
        let current = self.value.load(Relaxed);
        self.value.store(current.wrapping_add(delta), Relaxed);
    }

    /// Current value. Only meaningful once every worker has been joined.
    #[inline]
    pub fn get(&self) -> i64 {
        self.value.load(Relaxed)
    }

    /// Consumes the accumulator and returns the final value.
    pub fn into_inner(self) -> i64 {
        self.value.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::Accumulator;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Accumulator::new().get(), 0);
        assert_eq!(Accumulator::default().into_inner(), 0);
    }

    #[test]
    fn test_single_thread_add() {
        let acc = Accumulator::new();
        for v in 1..=10 {
            acc.add(v);
        }
        assert_eq!(acc.get(), 55);

        acc.add(-55);
        assert_eq!(acc.get(), 0);
    }

    #[test]
    fn test_wraps_instead_of_panicking() {
        let acc = Accumulator::new();
        acc.add(i64::MAX);
        acc.add(1);
        assert_eq!(acc.get(), i64::MIN);
    }
}
