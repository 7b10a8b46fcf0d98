//! Error handling for the vaccinated-case estimator.

pub mod util;

use chrono::NaiveDate;
use std::path::PathBuf;

/// Errors produced while loading, validating or estimating case data
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record (or the sequence it belongs to) violates its invariants
    #[error("Malformed record{}: {reason}", fmt_date(.date))]
    MalformedRecord {
        /// Date of the offending record, when known
        date: Option<NaiveDate>,
        /// What is wrong with it
        reason: String,
    },

    /// A requested date or region does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The efficacy formula would divide by zero
    #[error(
        "Degenerate input for region {region} on {date}: zero denominator for product {product}"
    )]
    DegenerateInput {
        /// Region being estimated
        region: String,
        /// Date of the record that triggered the zero denominator
        date: NaiveDate,
        /// Vaccine product whose term is undefined
        product: String,
    },

    /// Configuration values outside their allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error opening or reading a file
    #[error("IO error for {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Date string that is not `YYYY-MM-DD`
    #[error("Date parsing error for '{value}': {source}")]
    DateParse {
        /// Raw cell contents
        value: String,
        /// Parser error
        #[source]
        source: chrono::ParseError,
    },

    /// Integer cell that could not be parsed
    #[error("Number parsing error on line {line}: '{value}'")]
    NumberParse {
        /// Raw cell contents
        value: String,
        /// 1-based data line
        line: usize,
    },

    /// TOML configuration error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn fmt_date(date: &Option<NaiveDate>) -> String {
    date.map(|d| format!(" on {d}")).unwrap_or_default()
}

impl Error {
    /// Malformed record tied to a specific date
    pub fn malformed(date: NaiveDate, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            date: Some(date),
            reason: reason.into(),
        }
    }

    /// Malformed input without a usable date
    pub fn malformed_undated(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            date: None,
            reason: reason.into(),
        }
    }

    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for estimator operations
pub type Result<T> = std::result::Result<T, Error>;
