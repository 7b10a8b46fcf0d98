//! Daily case records
//!
//! A `DailyRecord` holds the cumulative vaccination and case totals reported for
//! one region on one date. A `DailySeries` is the ordered sequence of those
//! records for a single region, keyed uniquely by date.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Date format used for record dates in files and output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest year accepted for a record
pub const MIN_RECORD_YEAR: i32 = 2019;

/// Cumulative totals for one region on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    date: NaiveDate,
    cumulative_vaccinated_people: u64,
    cumulative_cases: u64,
}

impl DailyRecord {
    /// Create a validated record; negative counts are malformed
    pub fn new(
        date: NaiveDate,
        cumulative_vaccinated_people: i64,
        cumulative_cases: i64,
    ) -> Result<Self> {
        if date.year() < MIN_RECORD_YEAR {
            return Err(Error::malformed(
                date,
                format!("year {} is before {MIN_RECORD_YEAR}", date.year()),
            ));
        }

        let cumulative_vaccinated_people = u64::try_from(cumulative_vaccinated_people)
            .map_err(|_| {
                Error::malformed(
                    date,
                    format!("negative cumulative vaccinated people: {cumulative_vaccinated_people}"),
                )
            })?;
        let cumulative_cases = u64::try_from(cumulative_cases).map_err(|_| {
            Error::malformed(
                date,
                format!("negative cumulative cases: {cumulative_cases}"),
            )
        })?;

        Ok(Self {
            date,
            cumulative_vaccinated_people,
            cumulative_cases,
        })
    }

    /// Create a record from calendar components
    pub fn from_ymd(
        year: i32,
        month: u32,
        day: u32,
        cumulative_vaccinated_people: i64,
        cumulative_cases: i64,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::malformed_undated(format!("invalid calendar date {year}-{month}-{day}"))
        })?;
        Self::new(date, cumulative_vaccinated_people, cumulative_cases)
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn cumulative_vaccinated_people(&self) -> u64 {
        self.cumulative_vaccinated_people
    }

    #[must_use]
    pub const fn cumulative_cases(&self) -> u64 {
        self.cumulative_cases
    }
}

/// Ordered daily records for one region
///
/// Dates are unique within a series, so a date identifies exactly one record.
/// The order is the order the records were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailySeries {
    records: Vec<DailyRecord>,
    positions: FxHashMap<NaiveDate, usize>,
}

impl DailySeries {
    /// Build a series, rejecting duplicate dates
    pub fn new(records: Vec<DailyRecord>) -> Result<Self> {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(records.len(), Default::default());
        for (idx, record) in records.iter().enumerate() {
            if let Some(previous) = positions.insert(record.date, idx) {
                return Err(Error::malformed(
                    record.date,
                    format!("duplicate date at positions {previous} and {idx}"),
                ));
            }
        }
        Ok(Self { records, positions })
    }

    /// Position of the record with the given date
    #[must_use]
    pub fn position(&self, date: &NaiveDate) -> Option<usize> {
        self.positions.get(date).copied()
    }

    /// Record with the given date
    #[must_use]
    pub fn get(&self, date: &NaiveDate) -> Option<&DailyRecord> {
        self.position(date).map(|idx| &self.records[idx])
    }

    #[must_use]
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dates in series order
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(DailyRecord::date).collect()
    }

    /// First and last date, in series order
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }
}

impl TryFrom<Vec<DailyRecord>> for DailySeries {
    type Error = Error;

    fn try_from(records: Vec<DailyRecord>) -> Result<Self> {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a DailySeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
