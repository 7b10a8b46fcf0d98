//! Cases among the fully vaccinated
//!
//! Daily new cases are derived from cumulative totals, then apportioned to the
//! vaccinated population using the efficacy and administered share of each
//! vaccine product. The result can be compared against reference figures.

pub mod comparison;
pub mod delta;
pub mod estimator;

pub use comparison::{Comparison, ComparisonRow, ComparisonSummary, compare_with_reference};
pub use delta::{daily_delta, delta_at, region_daily_delta};
pub use estimator::{estimate_vaccinated_cases, vaccinated_cases_for_record};
