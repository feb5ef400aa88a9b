//! Convenience prelude for lock types.

pub use crate::error::{LockError, LockResult};
pub use crate::timeout::{Timeout, TimeoutValue};
pub use crate::traits::{DistributedLock, LockHandle};
