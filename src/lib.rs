//! RustyLog is a small, synchronous, thread-safe file logger.
//!
//! It provides:
//! - a process-wide [`Logger`](log::Logger), built once from `config.json`
//!   (or safe defaults), that filters by severity and appends one line per
//!   entry;
//! - a [`LogReader`](log::LogReader) that reads persisted lines back by level;
//! - the `rustylog` binary, a multi-threaded demo of both.

/// Logger configuration loading with fallback to defaults.
pub mod config;
/// Severity levels, the file sink, its singleton and the reader.
pub mod log;
