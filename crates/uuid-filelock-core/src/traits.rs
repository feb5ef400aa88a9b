//! Core traits for file-coordinated locks.

use std::future::Future;
use std::time::Duration;

use crate::error::LockResult;

// ============================================================================
// Lock Handle Trait
// ============================================================================

/// Handle to a held lock.
///
/// Dropping this handle releases the lock on a best-effort basis. For proper
/// error handling in async contexts, call `release()` explicitly.
///
/// # Example
///
/// ```rust,ignore
/// let handle = lock.acquire(None).await?;
/// // Critical section - we hold the lock
/// do_work().await;
/// // Explicit release with error handling
/// handle.release().await?;
/// ```
pub trait LockHandle: Send + Sync + Sized {
    /// Returns the ownership token this handle wrote to claim the lock.
    fn token(&self) -> &str;

    /// Re-reads the backing store and reports whether this handle still
    /// owns the lock.
    ///
    /// Ownership can be lost without the holder noticing, e.g. when another
    /// process deletes or overwrites the lock file.
    fn is_held(&self) -> LockResult<bool>;

    /// Explicitly releases the lock.
    ///
    /// This is also attempted automatically on drop, but the async version
    /// allows proper error handling.
    fn release(self) -> impl Future<Output = LockResult<()>> + Send;
}

// ============================================================================
// Distributed Lock Trait
// ============================================================================

/// A mutual exclusion lock shared between independent processes.
///
/// # Example
///
/// ```rust,ignore
/// use uuid_filelock_core::DistributedLock;
///
/// async fn protected_operation(lock: &impl DistributedLock) -> Result<(), Error> {
///     // Acquire with 5 second timeout
///     let handle = lock.acquire(Some(Duration::from_secs(5))).await?;
///
///     // We have exclusive access
///     perform_critical_section().await?;
///
///     handle.release().await?;
///     Ok(())
/// }
/// ```
pub trait DistributedLock: Send + Sync {
    /// The handle type returned when the lock is acquired.
    type Handle: LockHandle + Send;

    /// Returns the name identifying this lock.
    fn name(&self) -> &str;

    /// Acquires the lock, waiting up to `timeout`.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Maximum time to wait. `None` means wait indefinitely.
    ///
    /// # Returns
    ///
    /// * `Ok(handle)` - Lock acquired successfully
    /// * `Err(LockError::Timeout)` - Timeout expired before lock acquired
    /// * `Err(LockError::Io)` - The backing store failed
    ///
    /// # Cancellation
    ///
    /// Dropping the returned future stops further attempts. Backends must
    /// withdraw any claim they wrote but had not yet confirmed.
    fn acquire(
        &self,
        timeout: Option<Duration>,
    ) -> impl Future<Output = LockResult<Self::Handle>> + Send;

    /// Makes a single acquisition attempt without retrying.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(handle))` - Lock acquired successfully
    /// * `Ok(None)` - Lock is held by another contender
    /// * `Err(...)` - Error occurred during attempt
    fn try_acquire(&self) -> impl Future<Output = LockResult<Option<Self::Handle>>> + Send;
}
