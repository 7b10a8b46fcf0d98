//! Region constants
//!
//! Population and baseline case counts for each region the estimator knows.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date whose delta is anchored to the baseline cumulative count in the bundled data
#[must_use]
pub fn default_baseline_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 8, 9).unwrap_or_default()
}

/// Population and baseline for one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionConstants {
    /// Region name as used on the command line and in logs
    pub name: String,
    /// Total population of the region
    pub population: u64,
    /// Cumulative cases reported before `baseline_date`
    pub baseline_cumulative_cases: u64,
    /// The record on this date takes its daily delta against
    /// `baseline_cumulative_cases` instead of a predecessor record
    #[serde(default = "default_baseline_date")]
    pub baseline_date: NaiveDate,
}

impl RegionConstants {
    /// Create validated region constants
    pub fn new(
        name: impl Into<String>,
        population: u64,
        baseline_cumulative_cases: u64,
        baseline_date: NaiveDate,
    ) -> Result<Self> {
        let region = Self {
            name: name.into(),
            population,
            baseline_cumulative_cases,
            baseline_date,
        };
        region.validate()?;
        Ok(region)
    }

    /// Ontario, as of the 2021-08-09 baseline
    #[must_use]
    pub fn ontario() -> Self {
        Self {
            name: "Ontario".to_string(),
            population: 14_570_000,
            baseline_cumulative_cases: 552_479,
            baseline_date: default_baseline_date(),
        }
    }

    /// Nova Scotia, as of the 2021-08-09 baseline
    #[must_use]
    pub fn nova_scotia() -> Self {
        Self {
            name: "Nova Scotia".to_string(),
            population: 971_395,
            baseline_cumulative_cases: 5_900,
            baseline_date: default_baseline_date(),
        }
    }

    /// Bundled presets
    #[must_use]
    pub fn presets() -> Vec<Self> {
        vec![Self::ontario(), Self::nova_scotia()]
    }

    /// Check population is positive and the name is usable
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidConfig("region name is empty".to_string()));
        }
        if self.population == 0 {
            return Err(Error::InvalidConfig(format!(
                "region {} has zero population",
                self.name
            )));
        }
        Ok(())
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let ontario = RegionConstants::ontario();
        assert_eq!(ontario.population, 14_570_000);
        assert_eq!(ontario.baseline_cumulative_cases, 552_479);
        assert_eq!(
            ontario.baseline_date,
            NaiveDate::from_ymd_opt(2021, 8, 9).unwrap()
        );

        let nova_scotia = RegionConstants::nova_scotia();
        assert_eq!(nova_scotia.population, 971_395);
        assert_eq!(nova_scotia.baseline_cumulative_cases, 5_900);
    }

    #[test]
    fn test_zero_population_rejected() {
        let err = RegionConstants::new("Nowhere", 0, 0, default_baseline_date()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_name_matching() {
        let region = RegionConstants::nova_scotia();
        assert!(region.matches_name("nova scotia"));
        assert!(region.matches_name(" NOVA SCOTIA "));
        assert!(!region.matches_name("ontario"));
    }
}
