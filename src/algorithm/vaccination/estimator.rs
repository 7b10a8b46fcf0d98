//! Efficacy-weighted estimate of cases among the fully vaccinated
//!
//! For a record with `V` cumulative vaccinated people, `c` new cases and a region
//! population `N`, each product with share `s` and efficacy `e` contributes
//!
//! ```text
//!     V·s·c·(e − 1) / (V·s·e − N)
//! ```
//!
//! The contributions are summed in vaccine-mix order and truncated toward zero.

use std::time::Instant;

use super::delta::delta_at;
use crate::error::{Error, Result};
use crate::models::{DailyRecord, DailySeries, EstimateResult, RegionConstants, VaccineMix};

/// Estimate same-day cases among the fully vaccinated for every record
///
/// The result holds exactly one entry per record, in series order. Fails with
/// [`Error::DegenerateInput`] when a product's denominator is zero to within
/// rounding error.
pub fn estimate_vaccinated_cases(
    series: &DailySeries,
    region: &RegionConstants,
    vaccine_mix: &VaccineMix,
) -> Result<EstimateResult> {
    region.validate()?;
    if vaccine_mix.is_empty() {
        return Err(Error::InvalidConfig("vaccine mix is empty".to_string()));
    }

    let start = Instant::now();
    let records = series.records();
    let mut estimate = EstimateResult::with_capacity(records.len());

    for (position, record) in records.iter().enumerate() {
        let new_cases = delta_at(
            records,
            position,
            region.baseline_date,
            region.baseline_cumulative_cases,
        )?;
        let cases = vaccinated_cases_for_record(record, new_cases, region, vaccine_mix)?;
        estimate.push(record.date(), cases)?;
    }

    log::debug!(
        "Estimated vaccinated cases for {} over {} records ({} products) in {:?}",
        region.name,
        estimate.len(),
        vaccine_mix.len(),
        start.elapsed()
    );

    Ok(estimate)
}

/// Estimate for a single record given its new-case count
pub fn vaccinated_cases_for_record(
    record: &DailyRecord,
    new_cases: i64,
    region: &RegionConstants,
    vaccine_mix: &VaccineMix,
) -> Result<i64> {
    let vaccinated = record.cumulative_vaccinated_people() as f64;
    let new_cases = new_cases as f64;
    let population = region.population as f64;

    let mut accumulator = 0.0;
    for product in vaccine_mix.iter() {
        let share = product.entry.administered_share;
        let efficacy = product.entry.efficacy;

        let protected = vaccinated * share * efficacy;
        let numerator = vaccinated * share * new_cases * (efficacy - 1.0);
        let denominator = protected - population;
        let term = numerator / denominator;
        if is_degenerate(denominator, protected, population) || !term.is_finite() {
            return Err(degenerate(record, region, &product.name));
        }

        accumulator += term;
        if !accumulator.is_finite() {
            return Err(degenerate(record, region, &product.name));
        }
    }

    Ok(accumulator.trunc() as i64)
}

/// Relative tolerance, in units of `f64::EPSILON`, below which a denominator
/// counts as zero
const DEGENERATE_ULPS: f64 = 4.0;

/// `protected - population` vanishes up to the rounding of its operands
fn is_degenerate(denominator: f64, protected: f64, population: f64) -> bool {
    denominator.abs() <= f64::EPSILON * DEGENERATE_ULPS * population.max(protected.abs())
}

fn degenerate(record: &DailyRecord, region: &RegionConstants, product: &str) -> Error {
    Error::DegenerateInput {
        region: region.name.clone(),
        date: record.date(),
        product: product.to_string(),
    }
}
