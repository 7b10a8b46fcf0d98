//! Daily new-case counts derived from cumulative totals
//!
//! The record on the region's baseline date is measured against the baseline
//! cumulative count; every other record is measured against the record
//! immediately before it in the series.

use crate::error::{Error, Result};
use crate::models::{DailyRecord, DailySeries, RegionConstants};
use chrono::NaiveDate;

/// New cases reported on `target` date
///
/// Fails with [`Error::NotFound`] when no record carries `target`, and with
/// [`Error::MalformedRecord`] when the target is the first record of the series
/// but not on the baseline date, since it then has no predecessor.
pub fn daily_delta(
    series: &DailySeries,
    target: &NaiveDate,
    baseline_date: NaiveDate,
    baseline_cumulative_cases: u64,
) -> Result<i64> {
    let position = series
        .position(target)
        .ok_or_else(|| Error::NotFound(format!("no record dated {target}")))?;
    delta_at(
        series.records(),
        position,
        baseline_date,
        baseline_cumulative_cases,
    )
}

/// [`daily_delta`] using the baseline of `region`
pub fn region_daily_delta(
    series: &DailySeries,
    target: &NaiveDate,
    region: &RegionConstants,
) -> Result<i64> {
    daily_delta(
        series,
        target,
        region.baseline_date,
        region.baseline_cumulative_cases,
    )
}

/// New cases for the record at `position` in `records`
pub fn delta_at(
    records: &[DailyRecord],
    position: usize,
    baseline_date: NaiveDate,
    baseline_cumulative_cases: u64,
) -> Result<i64> {
    let record = records
        .get(position)
        .ok_or_else(|| Error::NotFound(format!("no record at position {position}")))?;

    if record.date() == baseline_date {
        return signed_difference(
            record.date(),
            record.cumulative_cases(),
            baseline_cumulative_cases,
        );
    }

    let Some(previous) = position.checked_sub(1).map(|idx| &records[idx]) else {
        return Err(Error::malformed(
            record.date(),
            format!(
                "first record has no predecessor and is not on the baseline date {baseline_date}"
            ),
        ));
    };

    signed_difference(
        record.date(),
        record.cumulative_cases(),
        previous.cumulative_cases(),
    )
}

fn signed_difference(date: NaiveDate, current: u64, previous: u64) -> Result<i64> {
    i64::try_from(i128::from(current) - i128::from(previous))
        .map_err(|_| Error::malformed(date, "case count difference out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_baseline_date;

    fn record(day: u32, vaccinated: i64, cases: i64) -> DailyRecord {
        DailyRecord::from_ymd(2021, 8, day, vaccinated, cases).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 8, day).unwrap()
    }

    #[test]
    fn test_baseline_record_uses_baseline_count() {
        let series = DailySeries::new(vec![record(9, 9_343_260, 552_804)]).unwrap();
        let delta = daily_delta(&series, &date(9), default_baseline_date(), 552_479).unwrap();
        assert_eq!(delta, 325);
    }

    #[test]
    fn test_later_record_uses_predecessor() {
        let series = DailySeries::new(vec![
            record(9, 9_343_260, 552_804),
            record(10, 1_000_000, 600_000),
        ])
        .unwrap();
        let delta = daily_delta(&series, &date(10), default_baseline_date(), 552_479).unwrap();
        assert_eq!(delta, 47_196);
    }

    #[test]
    fn test_region_baseline() {
        let series = DailySeries::new(vec![record(9, 650_135, 5_907)]).unwrap();
        let delta =
            region_daily_delta(&series, &date(9), &RegionConstants::nova_scotia()).unwrap();
        assert_eq!(delta, 7);
    }

    #[test]
    fn test_missing_target_is_not_found() {
        let series = DailySeries::new(vec![record(9, 1, 1)]).unwrap();
        let err = daily_delta(&series, &date(11), default_baseline_date(), 0).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_first_record_off_baseline_does_not_wrap() {
        // The last record would be the wrapped-around predecessor
        let series = DailySeries::new(vec![record(10, 1, 100), record(11, 1, 150)]).unwrap();
        let err = daily_delta(&series, &date(10), default_baseline_date(), 0).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { date: Some(d), .. } if d == date(10)));

        assert_eq!(
            daily_delta(&series, &date(11), default_baseline_date(), 0).unwrap(),
            50
        );
    }

    #[test]
    fn test_baseline_in_middle_of_series() {
        let series = DailySeries::new(vec![
            record(8, 1, 500),
            record(9, 1, 560),
            record(10, 1, 600),
        ])
        .unwrap();
        assert_eq!(delta_at(series.records(), 1, date(9), 520).unwrap(), 40);
        assert_eq!(delta_at(series.records(), 2, date(9), 520).unwrap(), 40);
        assert!(delta_at(series.records(), 0, date(9), 520).is_err());
    }

    #[test]
    fn test_decreasing_total_gives_negative_delta() {
        let series = DailySeries::new(vec![record(9, 1, 100), record(10, 1, 90)]).unwrap();
        assert_eq!(
            daily_delta(&series, &date(10), default_baseline_date(), 100).unwrap(),
            -10
        );
    }

    #[test]
    fn test_position_out_of_range() {
        let series = DailySeries::new(vec![record(9, 1, 100)]).unwrap();
        assert!(matches!(
            delta_at(series.records(), 3, default_baseline_date(), 0),
            Err(Error::NotFound(_))
        ));
    }
}
