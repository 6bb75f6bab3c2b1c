//! # Guarded values

use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut, Drop};

use crate::lock::Lock;

/// A value owned by, and only reachable through, a lock.
///
/// Every access path acquires the lock first: [`with_lock`] lends the value
/// to a callback and releases on return, while [`lock`] (or [`Guard::new`])
/// hands back a [`Guard`] that releases when dropped. No API returns a
/// reference to the value without holding the lock.
///
/// `GuardedValue` is not `Clone`; a copy would split the value from the
/// lock protecting it.
///
/// ```compile_fail
/// use guarded::GuardedValue;
///
/// let a = GuardedValue::new(0);
/// let b: GuardedValue<i32> = a.clone();
/// ```
///
/// While a [`Guard`] is live the `GuardedValue` is borrowed, so it cannot
/// be moved or dropped out from under the guard.
///
/// ```compile_fail
/// use guarded::GuardedValue;
///
/// let a = GuardedValue::new(0);
/// let guard = a.lock();
/// let b = a;
/// drop(guard);
/// ```
///
/// [`with_lock`]: GuardedValue::with_lock
/// [`lock`]: GuardedValue::lock
pub struct GuardedValue<T> {
    lock: Lock,
    inner: UnsafeCell<T>,
}

unsafe impl<T: Send> Send for GuardedValue<T> {}
unsafe impl<T: Send> Sync for GuardedValue<T> {}

impl<T> GuardedValue<T> {
    /// Create a new guarded value containing the given data.
    pub const fn new(data: T) -> GuardedValue<T> {
        GuardedValue {
            lock: Lock::new(),
            inner: UnsafeCell::new(data),
        }
    }

    /// Acquire the lock, run `f` on the protected value, release and
    /// return `f`'s result.
    ///
    /// Blocks until the lock is available. The lock is released on every
    /// exit path: a panic in `f` propagates to the caller after release.
    ///
    /// ```
    /// use guarded::GuardedValue;
    ///
    /// let value = GuardedValue::new(5);
    /// assert_eq!(value.with_lock(|val| *val + 5), 10);
    /// assert_eq!(value.with_lock(|val| *val), 5);
    /// ```
    ///
    /// The reference lent to `f` cannot outlive the call.
    ///
    /// ```compile_fail
    /// use guarded::GuardedValue;
    ///
    /// let value = GuardedValue::new(0);
    /// let mut escaped = None;
    /// value.with_lock(|val| escaped = Some(val));
    /// ```
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Acquire the lock, holding it until the returned guard is dropped.
    pub fn lock(&self) -> Guard<'_, T> {
        Guard::new(self)
    }
}

/// A handle that holds a [`GuardedValue`]'s lock and exposes its value.
///
/// The lock is held from construction until the guard is dropped,
/// including on unwind. Dropping the result of [`GuardedValue::lock`]
/// without binding it releases the lock immediately, which is flagged as
/// an unused-result usage error.
///
/// References obtained through a guard cannot outlive it.
///
/// ```compile_fail
/// use guarded::GuardedValue;
///
/// let value = GuardedValue::new(0);
/// let escaped = {
///     let mut guard = value.lock();
///     guard.get()
/// };
/// *escaped += 1;
/// ```
#[must_use = "the lock is released the moment the guard is dropped"]
pub struct Guard<'a, T: 'a> {
    lock: &'a Lock,
    inner: &'a mut T,
}

impl<'a, T> Guard<'a, T> {
    /// Block until `owner`'s lock is acquired, then hold it for the
    /// guard's lifetime. Equivalent to calling [`GuardedValue::lock`].
    pub fn new(owner: &'a GuardedValue<T>) -> Guard<'a, T> {
        owner.lock.lock();

        Guard {
            lock: &owner.lock,
            inner: unsafe { &mut *owner.inner.get() },
        }
    }

    /// A reference to the protected value.
    pub fn get(&mut self) -> &mut T {
        self.inner
    }
}

impl<T> Drop for Guard<'_, T> {
    /// Release the lock.
    fn drop(&mut self) {
        unsafe { self.lock.unlock() }
    }
}

impl<T> Deref for Guard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.inner
    }
}

impl<T> DerefMut for Guard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.inner
    }
}
