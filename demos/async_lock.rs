//! Example: Using the lock from async code
//!
//! Run with: `cargo run --example async_lock`

use std::time::Duration;

use uuid_filelock::prelude::*;
use uuid_filelock::{UuidFileLock, UuidFileLockOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = UuidFileLockOptions::builder()
        .prefix("async-demo-")
        .verification_delay(Duration::from_millis(100))
        .build()?;
    let path = std::env::temp_dir().join("uuid-filelock-async.lock");
    let lock = UuidFileLock::with_options(path, options)?;
    println!("Created lock: {}", DistributedLock::name(&lock));

    // Try to acquire the lock
    match DistributedLock::try_acquire(&lock).await? {
        Some(handle) => {
            println!("Lock acquired with token {}", handle.token());

            // Do some work while holding the lock
            tokio::time::sleep(Duration::from_secs(1)).await;
            println!("Work completed");

            handle.release().await?;
            println!("Lock released");
        }
        None => {
            println!("Lock is currently held by another contender");
        }
    }

    // Acquire with timeout
    println!("\nAcquiring lock with 5 second timeout...");
    let handle = DistributedLock::acquire(&lock, Some(Duration::from_secs(5))).await?;
    println!("Lock acquired!");

    // Lock is released when the handle is dropped
    drop(handle);
    println!("Lock released (via drop)");

    Ok(())
}
