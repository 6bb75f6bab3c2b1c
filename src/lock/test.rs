//! Testing

use std::thread;
use std::time::Duration;

use super::Lock;

#[test]
fn lock_and_unlock() {
    let lock = Lock::new();

    lock.lock();
    unsafe { lock.unlock() };

    lock.lock();
    unsafe { lock.unlock() };
}

#[test]
fn try_lock_while_held() {
    let lock = Lock::new();

    assert!(lock.try_lock());
    assert!(!lock.try_lock());

    unsafe { lock.unlock() };

    assert!(lock.try_lock());
    unsafe { lock.unlock() };
}

#[test]
fn wakes_parked_waiters() {
    static LOCK: Lock = Lock::new();

    LOCK.lock();

    let waiters: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                LOCK.lock();
                unsafe { LOCK.unlock() };
            })
        })
        .collect();

    // Give the waiters time to park before the first release.
    thread::sleep(Duration::from_millis(50));
    unsafe { LOCK.unlock() };

    for t in waiters {
        t.join().unwrap();
    }
}
