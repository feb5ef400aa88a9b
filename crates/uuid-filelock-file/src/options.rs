//! Per-lock configuration.

use std::time::Duration;

use uuid_filelock_core::error::LockResult;
use uuid_filelock_core::timeout::{Timeout, TimeoutValue};

use crate::defaults::LockDefaults;
use crate::token::validate_prefix;

/// Timing and token settings for a [`UuidFileLock`](crate::UuidFileLock).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidFileLockOptions {
    /// Prepended to the generated UUID to make lock files readable.
    pub prefix: String,
    /// Wait between writing the token and reading it back.
    pub verification_delay: Duration,
    /// Wait between unsuccessful attempts.
    pub retry_interval: Duration,
    /// Acquisition deadline used by the blocking `acquire`. `None` is infinite.
    pub timeout: Timeout,
}

impl UuidFileLockOptions {
    /// Returns a new builder for configuring lock options.
    pub fn builder() -> UuidFileLockOptionsBuilder {
        UuidFileLockOptionsBuilder::new()
    }
}

impl Default for UuidFileLockOptions {
    /// Empty prefix with the current process-wide defaults.
    fn default() -> Self {
        let defaults = LockDefaults::global();
        Self {
            prefix: String::new(),
            verification_delay: defaults.verification_delay,
            retry_interval: defaults.retry_interval,
            timeout: defaults.timeout,
        }
    }
}

/// Builder for [`UuidFileLockOptions`].
///
/// Fields left unset take the process-wide [`LockDefaults`] current at
/// `build()` time.
#[derive(Debug, Clone, Default)]
pub struct UuidFileLockOptionsBuilder {
    prefix: Option<String>,
    verification_delay: Option<Duration>,
    retry_interval: Option<Duration>,
    timeout: Option<Timeout>,
}

impl UuidFileLockOptionsBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the verification delay.
    pub fn verification_delay(mut self, delay: Duration) -> Self {
        self.verification_delay = Some(delay);
        self
    }

    /// Sets the retry interval.
    pub fn retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = Some(interval);
        self
    }

    /// Sets the acquisition timeout. `None` retries forever.
    pub fn timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the acquisition timeout in seconds. Negative values retry forever.
    pub fn timeout_secs_f64(self, secs: f64) -> Self {
        self.timeout(TimeoutValue::from_secs_f64(secs).as_duration())
    }

    /// Builds the options.
    ///
    /// # Errors
    ///
    /// Returns `LockError::InvalidName` if the prefix contains whitespace or
    /// control characters.
    pub fn build(self) -> LockResult<UuidFileLockOptions> {
        let defaults = LockDefaults::global();
        let prefix = self.prefix.unwrap_or_default();
        validate_prefix(&prefix)?;

        Ok(UuidFileLockOptions {
            prefix,
            verification_delay: self
                .verification_delay
                .unwrap_or(defaults.verification_delay),
            retry_interval: self.retry_interval.unwrap_or(defaults.retry_interval),
            timeout: self.timeout.unwrap_or(defaults.timeout),
        })
    }
}
