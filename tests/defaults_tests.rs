//! Tests for process-wide default timings.

use std::time::{Duration, Instant};

use serial_test::serial;
use tempfile::TempDir;
use uuid_filelock::{LockDefaults, UuidFileLock};

fn with_verification_delay(delay: Duration) {
    LockDefaults::set_global(LockDefaults {
        verification_delay: delay,
        ..LockDefaults::BUILTIN
    });
}

#[test]
#[serial]
fn test_default_verification_delay_applies_to_new_locks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".lock");

    for delay in [Duration::from_millis(300), Duration::from_millis(100)] {
        with_verification_delay(delay);
        let lock = UuidFileLock::new(&path).unwrap();

        let start = Instant::now();
        lock.with_lock(|| ()).unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= delay, "{elapsed:?} < {delay:?}");
        assert!(elapsed < delay + Duration::from_millis(500), "{elapsed:?}");
    }

    LockDefaults::reset_global();
}

#[test]
#[serial]
fn test_existing_locks_keep_their_defaults() {
    let dir = TempDir::new().unwrap();

    with_verification_delay(Duration::from_millis(10));
    let early = UuidFileLock::new(dir.path().join("early.lock")).unwrap();

    with_verification_delay(Duration::from_secs(30));
    let late = UuidFileLock::new(dir.path().join("late.lock")).unwrap();
    LockDefaults::reset_global();

    assert_eq!(early.options().verification_delay, Duration::from_millis(10));
    assert_eq!(late.options().verification_delay, Duration::from_secs(30));

    let start = Instant::now();
    early.acquire().unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));
    early.release().unwrap();
}

#[test]
#[serial]
fn test_default_timeout_applies() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".lock");

    LockDefaults::set_global(LockDefaults {
        verification_delay: Duration::from_millis(10),
        retry_interval: Duration::from_millis(10),
        timeout: Some(Duration::from_millis(100)),
    });
    let holder = UuidFileLock::new(&path).unwrap();
    let waiter = UuidFileLock::new(&path).unwrap();
    LockDefaults::reset_global();

    holder.acquire().unwrap();
    assert!(waiter.acquire().unwrap_err().is_timeout());
    holder.release().unwrap();
}
