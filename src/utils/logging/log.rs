//! Logging utilities
//!
//! Consistent log lines for file operations and estimate runs.

use std::path::Path;

use crate::algorithm::vaccination::ComparisonSummary;

/// Log the start of a file operation
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log a completed file operation
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "loaded"
/// * `path` - File that was operated on
/// * `records` - Number of records processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    records: usize,
    elapsed: Option<std::time::Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} records from {} in {:?}",
            operation,
            records,
            path.display(),
            duration
        ),
        None => log::info!(
            "Successfully {} {} records from {}",
            operation,
            records,
            path.display()
        ),
    }
}

/// Log a warning, optionally tied to a path
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}

/// Log the headline figures of a comparison
pub fn log_estimate_summary(region: &str, summary: &ComparisonSummary) {
    log::info!(
        "{}: {} days, {} estimated vaccinated cases, {} reference cases over {} matched days",
        region,
        summary.days,
        summary.total_estimated,
        summary.total_reference,
        summary.days_with_reference
    );
    if let Some(mae) = summary.mean_absolute_error {
        log::info!("{region}: mean absolute difference {mae:.2} cases/day");
    }
}
