//! Basic logger usage example
//!
//! Demonstrates the default logger, level filtering, and an independent
//! instance with its own level.
//!
//! Run with: cargo run --example basic_usage

use rollog::prelude::*;

fn main() {
    // The default logger writes to stderr with everything enabled.
    rollog::set_level_by_name("warn");
    rollog::warning("warning. this will be logged");
    rollog::debug("debug. this will not be logged");

    // An independent instance with its own level.
    let logger = Logger::new();
    logger.set_level_by_name("debug");
    logger.debug("debug, will be logged");

    // Colorized severity tags.
    logger.set_highlighting(true);
    logger.error("highlighted error");
    logger.info("highlighted info");

    // Formatted emission through the macro layer.
    let port = 8080;
    rollog::info!(logger, "listening on port {}", port);
}
