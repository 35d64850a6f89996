//! # Rollog
//!
//! A level-filtered logging library with daily, hourly, and
//! size-triggered log file rotation.
//!
//! ## Features
//!
//! - **Cumulative Levels**: enabling a severity always enables everything
//!   more severe
//! - **Rolling Files**: time-bucket backups (`app.log.2024-10-17`) or
//!   bounded numbered backups for size-based rotation
//! - **Thread Safe**: one logger can be shared freely across threads
//! - **Call-Site Attribution**: every line carries the file and line of
//!   the emission call
//!
//! ## Quick start
//!
//! ```
//! rollog::set_level_by_name("warn");
//! rollog::warning("this will be logged");
//! rollog::debug("this will not be logged");
//!
//! let logger = rollog::Logger::new();
//! logger.set_level_by_name("debug");
//! logger.debug("debug, will be logged");
//! ```

pub mod core;
pub mod macros;

mod global;

pub mod prelude {
    pub use crate::core::{LevelMask, LogError, Logger, Result, RotationPolicy, Severity};
}

pub use crate::core::{LevelMask, LogError, Logger, Result, RotationPolicy, Severity};
pub use crate::global::{
    debug, default_logger, error, fatal, info, level, panic, set_fail_fast, set_highlighting,
    set_level, set_level_by_name, set_output_path, set_prefix, set_rotate_by_size,
    set_rotate_daily, set_rotate_hourly, set_writer, warning,
};
