//! # Blocking lock

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, Thread};

use log_crate::trace;

use crate::spin::Spinlock;

// The meaning of the bool is as follows:
//     * false => UNLOCKED
//     * true  => LOCKED
/// A blocking lock.
///
/// Threads that cannot acquire the lock park themselves until a release
/// wakes them. Wakeup order among waiters is unspecified.
pub struct Lock {
    lock: AtomicBool,
    waiting: Spinlock<Vec<Thread>>,
}

impl Lock {
    pub const fn new() -> Self {
        Self {
            lock: AtomicBool::new(false),
            waiting: Spinlock::new(Vec::new()),
        }
    }

    /// Attempt to acquire the lock without blocking.
    pub fn try_lock(&self) -> bool {
        self.lock
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Acquire the lock, parking the calling thread until it is available.
    pub fn lock(&self) {
        if self.try_lock() {
            return;
        }

        loop {
            // Registration and the final check happen under the waiter-list
            // lock, so a release cannot slip between them unobserved.
            {
                let mut waiting = self.waiting.lock();
                if self.try_lock() {
                    return;
                }
                waiting.push(thread::current());
            }

            trace!("{:?} parking", thread::current().id());
            thread::park();
            self.unwait();
        }
    }

    /// Release the lock and wake one parked waiter.
    ///
    /// # Safety
    /// Should only be called when the lock was previously held.
    pub unsafe fn unlock(&self) {
        self.lock.store(false, Ordering::Release);

        let woken = self.waiting.lock().pop();
        if let Some(thread) = woken {
            trace!("waking {:?}", thread.id());
            thread.unpark();
        }
    }

    /// Drop any stale registration for the calling thread. A thread that
    /// wakes without having been popped must not leave a second entry
    /// behind when it re-registers.
    fn unwait(&self) {
        let me = thread::current().id();

        let mut waiting = self.waiting.lock();
        if let Some(i) = waiting.iter().position(|t| t.id() == me) {
            waiting.remove(i);
        }
    }
}

#[cfg(test)]
mod test;
