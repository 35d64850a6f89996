//! Process-wide default logger and its delegation helpers
//!
//! The default instance writes to standard error with every severity
//! enabled. It is created on first access and lives for the rest of the
//! process; the free functions below forward to it.

use crate::core::error::Result;
use crate::core::logger::Logger;
use crate::core::severity::LevelMask;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// The shared default logger.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

#[track_caller]
pub fn debug(message: impl Into<String>) {
    default_logger().log(crate::Severity::Debug, message);
}

#[track_caller]
pub fn info(message: impl Into<String>) {
    default_logger().log(crate::Severity::Info, message);
}

#[track_caller]
pub fn warning(message: impl Into<String>) {
    default_logger().log(crate::Severity::Warning, message);
}

#[track_caller]
pub fn error(message: impl Into<String>) {
    default_logger().log(crate::Severity::Error, message);
}

/// Write the record through the default logger, then end the process.
#[track_caller]
pub fn fatal(message: impl Into<String>) -> ! {
    default_logger().fatal(message)
}

/// Write a fatal-severity record through the default logger, then
/// unwind with the message.
#[track_caller]
pub fn panic(message: impl Into<String>) -> ! {
    default_logger().panic(message)
}

pub fn set_level(mask: LevelMask) {
    default_logger().set_level(mask);
}

pub fn set_level_by_name(name: &str) {
    default_logger().set_level_by_name(name);
}

pub fn level() -> LevelMask {
    default_logger().level()
}

pub fn set_writer(writer: Box<dyn Write + Send>) {
    default_logger().set_writer(writer);
}

/// Route the default logger to a file, remembering the path for
/// rotation.
///
/// # Errors
///
/// Returns [`LogError::Open`](crate::LogError::Open) if the file cannot
/// be opened (unless fail-fast has been enabled).
pub fn set_output_path(path: impl AsRef<Path>) -> Result<()> {
    default_logger().set_output_path(path)
}

pub fn set_prefix(prefix: impl Into<String>) {
    default_logger().set_prefix(prefix);
}

pub fn set_rotate_daily() {
    default_logger().set_rotate_daily();
}

pub fn set_rotate_hourly() {
    default_logger().set_rotate_hourly();
}

pub fn set_rotate_by_size(max_bytes: u64, max_backups: usize) {
    default_logger().set_rotate_by_size(max_bytes, max_backups);
}

pub fn set_highlighting(enabled: bool) {
    default_logger().set_highlighting(enabled);
}

pub fn set_fail_fast(enabled: bool) {
    default_logger().set_fail_fast(enabled);
}
