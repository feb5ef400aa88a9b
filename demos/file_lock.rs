//! Example: Several threads contending for one token-verified file lock
//!
//! Run with: `cargo run --example file_lock`

use std::time::Duration;

use uuid_filelock::{UuidFileLock, UuidFileLockOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::temp_dir().join("uuid-filelock-demo.lock");
    println!("Lock file: {}", path.display());

    std::thread::scope(|s| {
        let workers: Vec<_> = (0..3)
            .map(|worker| {
                let path = path.clone();
                s.spawn(move || -> Result<(), uuid_filelock::LockError> {
                    let options = UuidFileLockOptions::builder()
                        .prefix(format!("worker{worker}-"))
                        .verification_delay(Duration::from_millis(200))
                        .retry_interval(Duration::from_millis(100))
                        .timeout(Some(Duration::from_secs(10)))
                        .build()?;
                    let lock = UuidFileLock::with_options(path, options)?;

                    lock.with_lock(|| {
                        println!("{} acquired the lock", lock.token());
                        std::thread::sleep(Duration::from_millis(500));
                        println!("{} releasing", lock.token());
                    })
                })
            })
            .collect();

        for worker in workers {
            if let Err(e) = worker.join().expect("worker panicked") {
                eprintln!("worker failed: {e}");
            }
        }
    });

    // Check and release without the scoped helper
    let lock = UuidFileLock::new(&path)?;
    println!("\nHeld before acquire: {}", lock.check()?);
    lock.acquire()?;
    println!("Held after acquire: {}", lock.check()?);
    lock.release()?;
    println!("Held after release: {}", lock.check()?);

    Ok(())
}
