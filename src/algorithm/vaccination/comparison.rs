//! Comparison of the estimate against reference figures
//!
//! Joins the estimator output with the reference counts read from the input file,
//! by date, and summarises how far apart they are.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use crate::models::{EstimateResult, ReferenceSeries};

/// One date in the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub date: NaiveDate,
    pub estimated: i64,
    /// Reference count, if the reference series has this date
    pub reference: Option<i64>,
    /// `estimated - reference`
    pub difference: Option<i64>,
}

/// Aggregate figures over all rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub days: usize,
    pub days_with_reference: usize,
    pub total_estimated: i64,
    /// Sum of reference counts on dates that also have an estimate
    pub total_reference: i64,
    pub mean_absolute_error: Option<f64>,
    /// Date and difference of the row furthest from its reference
    pub largest_difference: Option<(NaiveDate, i64)>,
}

/// Estimate vs reference for one region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub region: String,
    pub rows: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
}

/// Join `estimate` with `reference` by date, in estimate order
///
/// Reference dates with no estimate are left out.
#[must_use]
pub fn compare_with_reference(
    region: &str,
    estimate: &EstimateResult,
    reference: &ReferenceSeries,
) -> Comparison {
    let rows = estimate
        .iter()
        .map(|(date, estimated)| {
            let reference = reference.get(&date);
            ComparisonRow {
                date,
                estimated,
                reference,
                difference: reference.map(|r| estimated.saturating_sub(r)),
            }
        })
        .collect_vec();

    let unmatched = reference.dates().filter(|d| !estimate.contains(d)).count();
    if unmatched > 0 {
        log::debug!("{unmatched} reference dates for {region} have no estimate");
    }

    let summary = summarize(&rows);
    Comparison {
        region: region.to_string(),
        rows,
        summary,
    }
}

fn summarize(rows: &[ComparisonRow]) -> ComparisonSummary {
    let matched = rows
        .iter()
        .filter_map(|row| Some((row.date, row.reference?, row.difference?)))
        .collect_vec();

    let mean_absolute_error = (!matched.is_empty()).then(|| {
        matched
            .iter()
            .map(|(_, _, diff)| diff.unsigned_abs() as f64)
            .sum::<f64>()
            / matched.len() as f64
    });

    let largest_difference = matched
        .iter()
        .max_by_key(|(_, _, diff)| diff.unsigned_abs())
        .map(|(date, _, diff)| (*date, *diff));

    ComparisonSummary {
        days: rows.len(),
        days_with_reference: matched.len(),
        total_estimated: saturating_total(rows.iter().map(|row| row.estimated)),
        total_reference: saturating_total(matched.iter().map(|(_, reference, _)| *reference)),
        mean_absolute_error,
        largest_difference,
    }
}

/// Sum clamped to the `i64` range
fn saturating_total(values: impl Iterator<Item = i64>) -> i64 {
    let total: i128 = values.map(i128::from).sum();
    i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DatedCounts;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 8, day).unwrap()
    }

    fn counts(values: &[(u32, i64)]) -> DatedCounts {
        let mut counts = DatedCounts::new();
        for &(day, value) in values {
            counts.push(date(day), value).unwrap();
        }
        counts
    }

    #[test]
    fn test_join_by_date() {
        let estimate = counts(&[(9, 19), (10, 186), (11, 40)]);
        let reference = counts(&[(10, 150), (9, 25), (12, 7)]);

        let comparison = compare_with_reference("Ontario", &estimate, &reference);
        assert_eq!(comparison.region, "Ontario");
        assert_eq!(
            comparison.rows,
            vec![
                ComparisonRow {
                    date: date(9),
                    estimated: 19,
                    reference: Some(25),
                    difference: Some(-6),
                },
                ComparisonRow {
                    date: date(10),
                    estimated: 186,
                    reference: Some(150),
                    difference: Some(36),
                },
                ComparisonRow {
                    date: date(11),
                    estimated: 40,
                    reference: None,
                    difference: None,
                },
            ]
        );
    }

    #[test]
    fn test_summary() {
        let estimate = counts(&[(9, 19), (10, 186), (11, 40)]);
        let reference = counts(&[(9, 25), (10, 150)]);

        let summary = compare_with_reference("Ontario", &estimate, &reference).summary;
        assert_eq!(summary.days, 3);
        assert_eq!(summary.days_with_reference, 2);
        assert_eq!(summary.total_estimated, 245);
        assert_eq!(summary.total_reference, 175);
        assert_eq!(summary.mean_absolute_error, Some(21.0));
        assert_eq!(summary.largest_difference, Some((date(10), 36)));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let estimate = counts(&[(9, 19), (10, i64::MAX)]);
        let reference = counts(&[(9, i64::MIN), (10, i64::MAX)]);

        let comparison = compare_with_reference("Ontario", &estimate, &reference);
        assert_eq!(comparison.rows[0].difference, Some(i64::MAX));
        assert_eq!(comparison.rows[1].difference, Some(0));
        assert_eq!(comparison.summary.total_estimated, i64::MAX);
        assert_eq!(comparison.summary.total_reference, -1);
        assert_eq!(comparison.summary.largest_difference, Some((date(9), i64::MAX)));
    }

    #[test]
    fn test_no_reference() {
        let estimate = counts(&[(9, 19)]);
        let summary = compare_with_reference("Ontario", &estimate, &DatedCounts::new()).summary;
        assert_eq!(summary.days_with_reference, 0);
        assert_eq!(summary.mean_absolute_error, None);
        assert_eq!(summary.largest_difference, None);
    }
}
