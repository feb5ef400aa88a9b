//! Token-verified file locks.
//!
//! [`UuidFileLock`] coordinates independent threads or processes through a
//! single shared file. A contender writes its random token into the file and
//! owns the lock only if the token is still there after a short verification
//! delay. No OS locking primitive is used, which keeps the scheme usable on
//! filesystems where `flock`/`O_EXCL` are unreliable, at the price of
//! timing-dependent (not atomic) exclusion.
//!
//! The inherent methods block the calling thread. The same protocol is
//! available asynchronously through [`DistributedLock`](uuid_filelock_core::DistributedLock);
//! because the names overlap, call it through generic code or with
//! `DistributedLock::acquire(&lock, timeout)`.

pub mod defaults;
pub mod handle;
pub mod lock;
pub mod options;
pub mod token;

pub use defaults::LockDefaults;
pub use handle::UuidFileLockHandle;
pub use lock::UuidFileLock;
pub use options::{UuidFileLockOptions, UuidFileLockOptionsBuilder};
