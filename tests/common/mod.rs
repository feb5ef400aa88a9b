//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use uuid_filelock::{Timeout, UuidFileLock, UuidFileLockOptions};

pub const VERIFICATION_DELAY: Duration = Duration::from_millis(50);
pub const RETRY_INTERVAL: Duration = Duration::from_millis(20);

/// A scratch directory with one lock path in it.
pub struct LockDir {
    dir: TempDir,
}

impl LockDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(".lock")
    }

    /// A contender with short test timings.
    pub fn lock(&self, prefix: &str) -> UuidFileLock {
        self.lock_with_timeout(prefix, None)
    }

    pub fn lock_with_timeout(&self, prefix: &str, timeout: Timeout) -> UuidFileLock {
        let options = UuidFileLockOptions::builder()
            .prefix(prefix)
            .verification_delay(VERIFICATION_DELAY)
            .retry_interval(RETRY_INTERVAL)
            .timeout(timeout)
            .build()
            .unwrap();
        UuidFileLock::with_options(self.path(), options).unwrap()
    }

    pub fn content(&self) -> Option<String> {
        std::fs::read_to_string(self.path()).ok()
    }
}
