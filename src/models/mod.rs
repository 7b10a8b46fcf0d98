//! Data models
//!
//! Daily records, region constants, the vaccine mix and the date-keyed count
//! series produced by the estimator.

pub mod estimate;
pub mod record;
pub mod region;
pub mod vaccine;

pub use estimate::{DatedCounts, EstimateResult, ReferenceSeries};
pub use record::{DATE_FORMAT, DailyRecord, DailySeries, MIN_RECORD_YEAR};
pub use region::{RegionConstants, default_baseline_date};
pub use vaccine::{VaccineMix, VaccineMixEntry, VaccineProduct};
