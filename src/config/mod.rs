//! Configuration for the estimator
//!
//! Region constants and the vaccine mix are immutable configuration built once
//! and passed explicitly to the estimator. They can be loaded from a TOML file;
//! any section left out falls back to the bundled presets.
//!
//! ```toml
//! baseline_date = "2021-08-09"
//!
//! [[regions]]
//! name = "Ontario"
//! population = 14570000
//! baseline_cumulative_cases = 552479
//!
//! [[vaccine_mix]]
//! name = "Pfizer"
//! efficacy = 0.95
//! administered_share = 0.77
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::util::safe_read_to_string;
use crate::error::{Error, Result};
use crate::models::{RegionConstants, VaccineMix, default_baseline_date};

/// Configuration for estimate runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Baseline date applied to regions that do not set their own
    #[serde(default = "default_baseline_date")]
    pub baseline_date: NaiveDate,
    /// Known regions; the bundled presets when the key is absent
    #[serde(default = "preset_regions")]
    pub regions: Vec<RegionConfig>,
    /// Vaccine products in summation order
    #[serde(default)]
    pub vaccine_mix: VaccineMix,
}

/// A region entry as written in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: String,
    pub population: u64,
    pub baseline_cumulative_cases: u64,
    /// Overrides the top-level baseline date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_date: Option<NaiveDate>,
}

impl From<&RegionConstants> for RegionConfig {
    fn from(region: &RegionConstants) -> Self {
        Self {
            name: region.name.clone(),
            population: region.population,
            baseline_cumulative_cases: region.baseline_cumulative_cases,
            baseline_date: Some(region.baseline_date),
        }
    }
}

fn preset_regions() -> Vec<RegionConfig> {
    RegionConstants::presets()
        .iter()
        .map(RegionConfig::from)
        .collect()
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            baseline_date: default_baseline_date(),
            regions: preset_regions(),
            vaccine_mix: VaccineMix::default(),
        }
    }
}

impl EstimatorConfig {
    /// Create a configuration with the bundled presets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "estimator configuration")?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded configuration from {} ({} regions, {} vaccine products)",
            path.display(),
            config.regions.len(),
            config.vaccine_mix.len()
        );
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// A file without a `regions` section uses the bundled regions.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every region and the vaccine mix
    pub fn validate(&self) -> Result<()> {
        if self.regions.is_empty() {
            return Err(Error::InvalidConfig("no regions configured".to_string()));
        }
        for (idx, region) in self.regions.iter().enumerate() {
            let constants = self.constants_for(region);
            constants.validate()?;
            if self.regions[..idx]
                .iter()
                .any(|other| constants.matches_name(&other.name))
            {
                return Err(Error::InvalidConfig(format!(
                    "region {} listed twice",
                    region.name
                )));
            }
        }
        self.vaccine_mix.validate()
    }

    /// Constants for the region called `name` (case-insensitive)
    pub fn region(&self, name: &str) -> Result<RegionConstants> {
        self.regions
            .iter()
            .map(|region| self.constants_for(region))
            .find(|constants| constants.matches_name(name))
            .ok_or_else(|| {
                let known: Vec<&str> = self.regions.iter().map(|r| r.name.as_str()).collect();
                Error::NotFound(format!(
                    "region '{name}' is not configured (known: {})",
                    known.join(", ")
                ))
            })
    }

    /// All configured regions as constants
    #[must_use]
    pub fn region_constants(&self) -> Vec<RegionConstants> {
        self.regions
            .iter()
            .map(|region| self.constants_for(region))
            .collect()
    }

    /// Add or replace a region
    #[must_use]
    pub fn with_region(mut self, region: &RegionConstants) -> Self {
        self.regions.retain(|r| !region.matches_name(&r.name));
        self.regions.push(RegionConfig::from(region));
        self
    }

    /// Replace the vaccine mix
    #[must_use]
    pub fn with_vaccine_mix(mut self, vaccine_mix: VaccineMix) -> Self {
        self.vaccine_mix = vaccine_mix;
        self
    }

    /// Set the default baseline date
    #[must_use]
    pub const fn with_baseline_date(mut self, baseline_date: NaiveDate) -> Self {
        self.baseline_date = baseline_date;
        self
    }

    fn constants_for(&self, region: &RegionConfig) -> RegionConstants {
        RegionConstants {
            name: region.name.clone(),
            population: region.population,
            baseline_cumulative_cases: region.baseline_cumulative_cases,
            baseline_date: region.baseline_date.unwrap_or(self.baseline_date),
        }
    }
}
