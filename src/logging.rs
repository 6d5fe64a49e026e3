//! Structured logging for the oceans binaries.

use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::{OceansError, Result};
use crate::section::Section;

/// Install the stderr subscriber. `RUST_LOG` wins over `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    // stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Run one pipeline step under a fresh run id.
///
/// `details` is logged when the step starts. On success the duration is
/// logged at info; on failure the error goes through [`log_error`] and is
/// returned unchanged.
pub fn log_timed_operation<T, F>(operation: &str, details: &str, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let start = Instant::now();
    let run_id = Uuid::new_v4();
    debug!(operation, run_id = %run_id, details, "Starting operation");

    let result = f();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    match &result {
        Ok(_) => info!(operation, run_id = %run_id, duration_ms, "Operation completed"),
        Err(e) => {
            log_error(e, operation);
            debug!(operation, run_id = %run_id, duration_ms, "Operation failed");
        }
    }

    result
}

/// Log a summary of a loaded section
pub fn log_section_stats(file_path: &str, section: &Section) {
    let (min, max) = section.value_range().unwrap_or((f64::NAN, f64::NAN));
    info!(
        operation = "section_load",
        file_path,
        variable = section.variable(),
        stations = section.n_stations(),
        levels = section.n_levels(),
        missing_cells = section.missing_cells(),
        min_value = min,
        max_value = max,
        "Section loaded"
    );
}

/// Log an error with the step it came from
pub fn log_error(error: &OceansError, context: &str) {
    let kind = match error {
        OceansError::Io(_) => "io",
        OceansError::Config { .. } => "config",
        OceansError::InvalidInput { .. } => "invalid_input",
        OceansError::NumericDomain { .. } => "numeric_domain",
        OceansError::InvalidParameter { .. } => "invalid_parameter",
        OceansError::DataNotFound { .. } => "data_not_found",
        OceansError::Json(_) => "json",
    };
    error!(error = %error, kind, context, "Error occurred");
}
