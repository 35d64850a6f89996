//! File rotation example
//!
//! Demonstrates routing output to a file, daily rotation, and
//! size-triggered rotation with numbered backups.
//!
//! Run with: cargo run --example file_rotation

use rollog::prelude::*;

fn main() -> Result<()> {
    // Route the default logger to a file; backups will be suffixed with
    // the finished day, e.g. "application.log.2024-10-17".
    rollog::set_output_path("application.log")?;
    rollog::set_rotate_daily();

    rollog::info("application started");
    rollog::info("configuration loaded");
    rollog::warning("using default settings for some options");

    // An independent instance with size-based rotation: once the file
    // reaches 4 KiB it is moved to "worker.log.1" and a fresh file is
    // started, keeping at most five backups.
    let logger = Logger::new();
    logger.set_output_path("worker.log")?;
    logger.set_rotate_by_size(4 * 1024, 5);

    for i in 1..=100 {
        logger.info(format!("processing item {i}/100"));
        if i % 25 == 0 {
            logger.warning(format!("checkpoint at item {i}"));
        }
    }

    logger.info("all operations completed");
    logger.flush()?;

    println!("wrote application.log and worker.log (with rotation backups)");
    Ok(())
}
