//! Estimate how many reported COVID-19 cases occurred in fully vaccinated
//! individuals, from vaccination-rollout and cumulative case-count time series,
//! and compare the estimate against reference figures.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{EstimatorConfig, RegionConfig};
pub use error::{Error, Result};
pub use models::{
    DailyRecord, DailySeries, DatedCounts, EstimateResult, ReferenceSeries, RegionConstants,
    VaccineMix, VaccineMixEntry,
};

// Estimation
pub use algorithm::vaccination::{
    Comparison, ComparisonRow, ComparisonSummary, compare_with_reference, daily_delta,
    estimate_vaccinated_cases,
};

// Input and output
pub use loader::{RegionData, load_daily_records, load_reference_series, load_region_file};
pub use report::{OutputFormat, write_comparison};
