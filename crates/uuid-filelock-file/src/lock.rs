//! Token-verified file lock implementation.
//!
//! # Protocol
//!
//! Each lock instance owns a random token. To acquire, a contender that sees
//! no lock file writes its token as the whole file content, waits for the
//! verification delay, then reads the file back. Only the contender whose
//! token survived the overwrite race owns the lock. A contender that finds
//! the file present, or loses the race, sleeps for the retry interval and
//! tries again until its timeout expires.
//!
//! No exclusive-create flag or OS-level lock is involved, so mutual exclusion
//! is probabilistic: it holds as long as the verification delay is longer
//! than the window between one contender's existence check and its write
//! (filesystem latency, scheduling stalls, clock skew on shared mounts).
//! Pick the delay with that window in mind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{Span, debug, instrument, trace};
use uuid_filelock_core::error::{LockError, LockResult};
use uuid_filelock_core::timeout::{Timeout, TimeoutValue};
use uuid_filelock_core::traits::DistributedLock;

use crate::handle::UuidFileLockHandle;
use crate::options::UuidFileLockOptions;
use crate::token::{generate_token, validate_prefix};

/// State shared between a lock and the handles it hands out.
#[derive(Debug)]
pub(crate) struct LockState {
    path: PathBuf,
    name: String,
    token: String,
    options: UuidFileLockOptions,
}

impl LockState {
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Reads the current holder's token, trimmed. `None` if there is no lock file.
    fn read_holder(&self) -> LockResult<Option<String>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).trim().to_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn holds(&self) -> LockResult<bool> {
        Ok(self.read_holder()?.as_deref() == Some(self.token.as_str()))
    }

    /// Writes our token if no lock file exists. Returns whether it wrote.
    fn claim_if_absent(&self) -> LockResult<bool> {
        if self.path.try_exists()? {
            trace!(path = %self.path.display(), "lock file present");
            return Ok(false);
        }
        std::fs::write(&self.path, self.token.as_bytes())?;
        Ok(true)
    }

    /// Deletes the lock file if it holds our token. Returns whether it deleted.
    ///
    /// The read and the delete are not atomic. If the file is removed
    /// externally and another contender writes its token between them, the
    /// delete removes that contender's live lock. The window is inherent to
    /// a check-then-delete without OS locking.
    pub(crate) fn release(&self) -> LockResult<bool> {
        if !self.holds()? {
            return Ok(false);
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Withdraws a written but unverified claim if the async attempt is dropped.
struct PendingClaim<'a> {
    state: &'a LockState,
    armed: bool,
}

impl PendingClaim<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingClaim<'_> {
    fn drop(&mut self) {
        if self.armed
            && let Err(e) = self.state.release()
        {
            debug!(error = %e, "failed to withdraw cancelled claim");
        }
    }
}

/// An advisory lock backed by a single file holding the owner's token.
///
/// Every instance generates its own token, so two instances targeting the
/// same path are independent contenders even inside one process. The lock is
/// neither fair nor re-entrant: calling [`acquire`](Self::acquire) while
/// already holding the lock finds the file present and keeps retrying until
/// the timeout expires (or forever without one).
#[derive(Debug)]
pub struct UuidFileLock {
    state: Arc<LockState>,
}

impl UuidFileLock {
    /// Creates a lock for `path` using the current process-wide defaults.
    pub fn new(path: impl Into<PathBuf>) -> LockResult<Self> {
        Self::with_options(path, UuidFileLockOptions::default())
    }

    /// Creates a lock for `path` with explicit options.
    ///
    /// # Errors
    ///
    /// Returns `LockError::InvalidName` if the path has no file name or the
    /// token prefix contains whitespace.
    pub fn with_options(path: impl Into<PathBuf>, options: UuidFileLockOptions) -> LockResult<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                LockError::InvalidName(format!("invalid lock file path '{}'", path.display()))
            })?;
        validate_prefix(&options.prefix)?;

        let token = generate_token(&options.prefix);
        Ok(Self {
            state: Arc::new(LockState {
                path,
                name,
                token,
                options,
            }),
        })
    }

    /// Returns the path to the lock file.
    pub fn path(&self) -> &Path {
        self.state.path()
    }

    /// Returns the lock file name.
    pub fn name(&self) -> &str {
        &self.state.name
    }

    /// Returns the token this instance writes to claim the lock.
    pub fn token(&self) -> &str {
        self.state.token()
    }

    /// Returns the options snapshot this lock was built with.
    pub fn options(&self) -> &UuidFileLockOptions {
        &self.state.options
    }

    /// Blocks until the lock is acquired or the configured timeout expires.
    pub fn acquire(&self) -> LockResult<()> {
        self.acquire_timeout(self.state.options.timeout)
    }

    /// Blocks until the lock is acquired or `timeout` expires.
    ///
    /// The deadline is checked once per attempt, so a failing call may run
    /// past `timeout` by up to one retry interval plus one verification
    /// delay.
    ///
    /// # Errors
    ///
    /// * `LockError::Timeout` - the deadline passed without a verified claim
    /// * `LockError::Io` - writing or reading the lock file failed
    #[instrument(skip(self), fields(lock.path = %self.path().display(), timeout = ?timeout, backend = "uuid-file", acquired = tracing::field::Empty, elapsed_ms = tracing::field::Empty))]
    pub fn acquire_timeout(&self, timeout: Timeout) -> LockResult<()> {
        let timeout_value = TimeoutValue::from(timeout);
        let start = Instant::now();

        loop {
            if self.attempt_blocking()? {
                record_outcome(true, start);
                return Ok(());
            }

            if let Some(timeout) = timeout_value.expired_since(start) {
                record_outcome(false, start);
                return Err(LockError::Timeout(timeout));
            }

            std::thread::sleep(self.state.options.retry_interval);
        }
    }

    /// Makes exactly one write/verify round without retrying.
    ///
    /// Still sleeps for the verification delay when it writes a claim.
    #[instrument(skip(self), fields(lock.path = %self.path().display(), backend = "uuid-file"))]
    pub fn try_acquire(&self) -> LockResult<bool> {
        self.attempt_blocking()
    }

    /// Reports whether the lock file currently holds this instance's token.
    ///
    /// Never modifies the file. A missing file is `Ok(false)`.
    pub fn check(&self) -> LockResult<bool> {
        self.state.holds()
    }

    /// Deletes the lock file if, and only if, it holds this instance's token.
    ///
    /// Calling this without holding the lock is a no-op.
    #[instrument(skip(self), fields(lock.path = %self.path().display(), backend = "uuid-file"))]
    pub fn release(&self) -> LockResult<()> {
        if self.state.release()? {
            debug!("lock released");
        }
        Ok(())
    }

    /// Acquires the lock and returns a guard that releases it when dropped.
    pub fn lock(&self) -> LockResult<UuidFileLockHandle> {
        self.acquire()?;
        Ok(UuidFileLockHandle::new(Arc::clone(&self.state)))
    }

    /// Runs `f` while holding the lock.
    ///
    /// The lock is released on every exit path, including a panic in `f`.
    /// An acquisition failure is returned before `f` runs. A release failure
    /// is returned after `f` has run, discarding its value even though the
    /// protected work succeeded.
    pub fn with_lock<T>(&self, f: impl FnOnce() -> T) -> LockResult<T> {
        let handle = self.lock()?;
        let value = f();
        handle.unlock()?;
        Ok(value)
    }

    fn attempt_blocking(&self) -> LockResult<bool> {
        if !self.state.claim_if_absent()? {
            return Ok(false);
        }
        std::thread::sleep(self.state.options.verification_delay);
        self.verify_claim()
    }

    async fn try_acquire_internal(&self) -> LockResult<Option<UuidFileLockHandle>> {
        if !self.state.claim_if_absent()? {
            return Ok(None);
        }

        let pending = PendingClaim {
            state: &self.state,
            armed: true,
        };
        tokio::time::sleep(self.state.options.verification_delay).await;
        let verified = self.verify_claim();
        pending.disarm();

        Ok(verified?.then(|| UuidFileLockHandle::new(Arc::clone(&self.state))))
    }

    fn verify_claim(&self) -> LockResult<bool> {
        let held = self.state.holds()?;
        if !held {
            debug!(path = %self.path().display(), "claim overwritten by another contender");
        }
        Ok(held)
    }
}

fn record_outcome(acquired: bool, start: Instant) {
    let span = Span::current();
    span.record("acquired", acquired);
    span.record("elapsed_ms", duration_millis(start.elapsed()));
}

fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl DistributedLock for UuidFileLock {
    type Handle = UuidFileLockHandle;

    fn name(&self) -> &str {
        UuidFileLock::name(self)
    }

    #[instrument(skip(self), fields(lock.name = %self.name(), lock.path = %self.path().display(), timeout = ?timeout, backend = "uuid-file", acquired = tracing::field::Empty, elapsed_ms = tracing::field::Empty))]
    async fn acquire(&self, timeout: Option<Duration>) -> LockResult<Self::Handle> {
        let timeout_value = TimeoutValue::from(timeout);
        let start = Instant::now();

        loop {
            if let Some(handle) = self.try_acquire_internal().await? {
                record_outcome(true, start);
                return Ok(handle);
            }

            if let Some(timeout) = timeout_value.expired_since(start) {
                record_outcome(false, start);
                return Err(LockError::Timeout(timeout));
            }

            tokio::time::sleep(self.state.options.retry_interval).await;
        }
    }

    #[instrument(skip(self), fields(lock.name = %self.name(), lock.path = %self.path().display(), backend = "uuid-file"))]
    async fn try_acquire(&self) -> LockResult<Option<Self::Handle>> {
        self.try_acquire_internal().await
    }
}
