//! Error types for lock operations.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during lock operations.
#[derive(Error, Debug)]
pub enum LockError {
    /// Lock acquisition timed out.
    #[error("lock acquisition timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid lock path or token prefix.
    #[error("invalid lock name: {0}")]
    InvalidName(String),

    /// Filesystem failure while writing, reading or deleting the lock file.
    ///
    /// A missing lock file is never reported through this variant; it is
    /// the normal "not held" state.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LockError {
    /// Returns `true` if this is a [`LockError::Timeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Result type for lock operations.
pub type LockResult<T> = Result<T, LockError>;
