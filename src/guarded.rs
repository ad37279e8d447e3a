//! # Guarded
//!
//! Pairs a value with any [`RawLock`] so the value can only be reached while the lock is
//! held. The lock is released when the returned [`GuardedRef`] is dropped, which rules out
//! the unbalanced `acquire`/`release` pairs the raw interface allows.
//!
//! ## Example
//! ```rust
//! use spinlock_bench::{Guarded, TtasLock};
//!
//! static COUNTER: Guarded<TtasLock, u64> = Guarded::new(TtasLock::new(), 0);
//!
//! *COUNTER.lock() += 1;
//! COUNTER.with_lock(|n| *n += 1);
//! assert_eq!(*COUNTER.lock(), 2);
//! ```

use core::cell::UnsafeCell;
use core::ops::{Deref, DerefMut};

use crate::lock::RawLock;

/// A value protected by a spin lock of type `L`.
pub struct Guarded<L: RawLock, T> {
    lock: L,
    data: UnsafeCell<T>,
}

/// Exclusive access to the value inside a [`Guarded`]; releases the lock on drop.
pub struct GuardedRef<'a, L: RawLock, T> {
    guarded: &'a Guarded<L, T>,
}

impl<L: RawLock, T> Drop for GuardedRef<'_, L, T> {
    #[inline]
    fn drop(&mut self) {
        self.guarded.lock.release()
    }
}

impl<L: RawLock, T> Guarded<L, T> {
    /// Wraps `data` behind `lock`.
    #[inline(always)]
    pub const fn new(lock: L, data: T) -> Self {
        Guarded {
            lock,
            data: UnsafeCell::new(data),
        }
    }

    /// Spins until the lock is obtained.
    #[inline]
    pub fn lock(&self) -> GuardedRef<'_, L, T> {
        self.lock.acquire();
        GuardedRef { guarded: self }
    }

    /// Takes the lock only if it is free right now.
    #[inline]
    pub fn try_lock(&self) -> Option<GuardedRef<'_, L, T>> {
        if self.lock.try_acquire() {
            Some(GuardedRef { guarded: self })
        } else {
            None
        }
    }

    /// Runs `f` with exclusive access to the value.
    #[inline]
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Returns whether some guard currently holds the lock.
    #[inline(always)]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Consumes the wrapper and returns the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

impl<L: RawLock, T: Default> Default for Guarded<L, T> {
    fn default() -> Self {
        Self::new(L::default(), T::default())
    }
}

impl<L: RawLock, T> Deref for GuardedRef<'_, L, T> {
    type Target = T;
    #[inline(always)]
    fn deref(&self) -> &T {
        // SAFETY: the guard exists only while the lock is held.
        unsafe { &*(self.guarded.data.get()) }
    }
}

impl<L: RawLock, T> DerefMut for GuardedRef<'_, L, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: the guard exists only while the lock is held, and it is borrowed mutably.
        unsafe { &mut *self.guarded.data.get() }
    }
}

// Safety: every access to `data` goes through a guard that holds `lock`.
unsafe impl<L: RawLock, T: Send> Send for Guarded<L, T> {}
unsafe impl<L: RawLock, T: Send> Sync for Guarded<L, T> {}
