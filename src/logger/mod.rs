//! Structured logging system for the trade journal
//!
//! This module provides a small, tag-based logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via --debug-<tag> flags
//! - Tag filtering via --log-tags=<a,b>; --quiet hides everything below warnings
//! - Dual output: colored console + daily log file
//!
//! ## Usage
//!
//! ```rust
//! use trade_journal::logger::{self, LogTag};
//!
//! logger::info(LogTag::Journal, "Trade entry saved");
//! logger::debug(LogTag::Database, "Query details: ..."); // Only if --debug-database
//! ```
//!
//! Call `logger::init()` once at startup, after the logs directory exists.

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// 1. Parse command-line arguments for debug flags
/// 2. Open the daily log file
pub fn init() {
    config::init_from_args();
    file::init_file_logging();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless filtered by tag)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (shown by default, hidden by --quiet)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the --debug-<tag> flag for this tag was provided, and
/// never under --quiet.
///
/// # Example
/// ```rust
/// use trade_journal::logger::{self, LogTag};
///
/// // Only shown with --debug-dashboard
/// logger::debug(LogTag::Dashboard, "Aggregated 12 closed trades");
/// ```
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose or --verbose-<tag>)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Force flush all pending log writes
///
/// Call this during shutdown to ensure all logs are written to disk.
pub fn flush() {
    file::flush_file_logging();
}
