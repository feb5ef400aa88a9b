//! Advisory locks between independent processes, coordinated through one
//! shared file and verified by a random ownership token.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use uuid_filelock::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = UuidFileLockOptions::builder()
//!         .prefix("worker-1-")
//!         .verification_delay(Duration::from_millis(200))
//!         .timeout(Some(Duration::from_secs(10)))
//!         .build()?;
//!     let lock = UuidFileLock::with_options("/tmp/jobs.lock", options)?;
//!
//!     // Released after the closure returns, even if it panics.
//!     let result = lock.with_lock(|| "critical work")?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```
//!
//! # How It Works
//!
//! 1. A contender that finds no lock file writes its token into it
//! 2. It waits for the verification delay
//! 3. It reads the file back; if its token survived, it owns the lock
//! 4. Otherwise it waits for the retry interval and starts over
//! 5. Release deletes the file only if it still holds the caller's token
//!
//! # Limitations
//!
//! - Not fair and not re-entrant
//! - Exclusion is timing-based: two contenders can both win if one stalls
//!   between its existence check and its write for longer than the
//!   verification delay
//! - A holder that dies leaves its token behind; nothing expires it
//!
//! # Crate Organization
//!
//! This is a meta-crate that re-exports types from:
//! - `uuid-filelock-core`: Core traits and types
//! - `uuid-filelock-file`: The file lock itself

// Re-export core types and traits
pub use uuid_filelock_core::*;

// Re-export file lock
pub use uuid_filelock_file::*;
