//! Process-wide default timings.
//!
//! Options snapshot these values when they are built, so a lock keeps the
//! defaults that were current at construction even if they change later.
//! Set the defaults during start-up, before creating any locks that should
//! observe them.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use uuid_filelock_core::timeout::Timeout;

/// Wait between writing the token and reading it back.
pub const DEFAULT_VERIFICATION_DELAY: Duration = Duration::from_secs(1);

/// Wait between unsuccessful acquisition attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(500);

/// Acquisition deadline. `None` retries forever.
pub const DEFAULT_TIMEOUT: Timeout = None;

static GLOBAL: RwLock<LockDefaults> = RwLock::new(LockDefaults::BUILTIN);

/// Default timings applied to options that leave a field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockDefaults {
    pub verification_delay: Duration,
    pub retry_interval: Duration,
    pub timeout: Timeout,
}

impl LockDefaults {
    /// The compiled-in defaults.
    pub const BUILTIN: Self = Self {
        verification_delay: DEFAULT_VERIFICATION_DELAY,
        retry_interval: DEFAULT_RETRY_INTERVAL,
        timeout: DEFAULT_TIMEOUT,
    };

    /// Returns a snapshot of the current process-wide defaults.
    pub fn global() -> Self {
        *GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the process-wide defaults, returning the previous values.
    pub fn set_global(defaults: Self) -> Self {
        let mut current = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(?defaults, "updating process-wide lock defaults");
        std::mem::replace(&mut *current, defaults)
    }

    /// Restores the compiled-in defaults.
    pub fn reset_global() {
        Self::set_global(Self::BUILTIN);
    }
}

impl Default for LockDefaults {
    fn default() -> Self {
        Self::BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_set_global_returns_previous() {
        LockDefaults::reset_global();
        let custom = LockDefaults {
            verification_delay: Duration::from_millis(5),
            ..LockDefaults::BUILTIN
        };
        assert_eq!(LockDefaults::set_global(custom), LockDefaults::BUILTIN);
        assert_eq!(LockDefaults::global(), custom);
        LockDefaults::reset_global();
        assert_eq!(LockDefaults::global(), LockDefaults::BUILTIN);
    }
}
