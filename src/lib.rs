//! Mutual exclusion that owns what it protects.
//!
//! A [`GuardedValue`] pairs a lock with the value the lock guards, so the
//! value is reachable only while the lock is held. Access goes through one
//! of two paths: [`with_lock`](GuardedValue::with_lock) runs a callback
//! with exclusive access and releases on return, and
//! [`lock`](GuardedValue::lock) returns a [`Guard`] that holds the lock
//! until it is dropped.
//!
//! ```
//! use std::thread;
//!
//! use guarded::GuardedValue;
//!
//! static COUNTER: GuardedValue<usize> = GuardedValue::new(0);
//!
//! let threads: Vec<_> = (0..4)
//!     .map(|_| thread::spawn(|| COUNTER.with_lock(|val| *val += 1)))
//!     .collect();
//!
//! for t in threads {
//!     t.join().unwrap();
//! }
//!
//! assert_eq!(COUNTER.with_lock(|val| *val), 4);
//! ```

mod guarded;
mod lock;
mod spin;

pub use guarded::{Guard, GuardedValue};
