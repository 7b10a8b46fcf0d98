//! Logging and console output
//!
//! Standard log lines for load operations and printed summaries of estimate runs.

pub mod console;
pub mod log;

pub use self::log::{log_estimate_summary, log_operation_complete, log_operation_start, log_warning};
