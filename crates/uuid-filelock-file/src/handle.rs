//! Scoped lock handle.

use std::path::Path;
use std::sync::Arc;

use tracing::{instrument, warn};
use uuid_filelock_core::error::LockResult;
use uuid_filelock_core::traits::LockHandle;

use crate::lock::LockState;

/// Handle for a held file lock.
///
/// Dropping this handle deletes the lock file if it still holds this
/// handle's token. Drop cannot report failures, so they are only logged;
/// call [`unlock`](Self::unlock) (or [`LockHandle::release`]) to observe them.
/// Neither path can restore ownership that was already lost, e.g. to a
/// contender that took over after an external deletion.
#[derive(Debug)]
pub struct UuidFileLockHandle {
    state: Arc<LockState>,
    released: bool,
}

impl UuidFileLockHandle {
    pub(crate) fn new(state: Arc<LockState>) -> Self {
        Self {
            state,
            released: false,
        }
    }

    /// Returns the path to the lock file.
    pub fn path(&self) -> &Path {
        self.state.path()
    }

    /// Returns the token written to the lock file.
    pub fn token(&self) -> &str {
        self.state.token()
    }

    /// Reports whether the lock file still holds this handle's token.
    pub fn is_held(&self) -> LockResult<bool> {
        self.state.holds()
    }

    /// Releases the lock, returning any filesystem error.
    #[instrument(skip(self), fields(lock.path = %self.path().display(), backend = "uuid-file"))]
    pub fn unlock(mut self) -> LockResult<()> {
        self.released = true;
        self.state.release().map(|_| ())
    }
}

impl LockHandle for UuidFileLockHandle {
    fn token(&self) -> &str {
        UuidFileLockHandle::token(self)
    }

    fn is_held(&self) -> LockResult<bool> {
        UuidFileLockHandle::is_held(self)
    }

    async fn release(self) -> LockResult<()> {
        self.unlock()
    }
}

impl Drop for UuidFileLockHandle {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.state.release() {
            warn!(path = %self.path().display(), error = %e, "failed to release lock on drop");
        }
    }
}
