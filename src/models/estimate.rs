//! Date-keyed count series
//!
//! Both the estimator output and the reference figures read from the input file
//! are ordered mappings from date to an integer count. Entries keep insertion
//! order and a date appears at most once.

use crate::error::{Error, Result};
use crate::models::DATE_FORMAT;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered date → count mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatedCounts {
    entries: Vec<(NaiveDate, i64)>,
    index: FxHashMap<NaiveDate, usize>,
}

/// Estimated cases among the fully vaccinated, one entry per input record
pub type EstimateResult = DatedCounts;

/// Reference counts supplied alongside the input records
pub type ReferenceSeries = DatedCounts;

impl DatedCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Append a value; a date already present is rejected
    pub fn push(&mut self, date: NaiveDate, value: i64) -> Result<()> {
        if self.index.contains_key(&date) {
            return Err(Error::malformed(date, "date appears more than once"));
        }
        self.index.insert(date, self.entries.len());
        self.entries.push((date, value));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, date: &NaiveDate) -> Option<i64> {
        self.index.get(date).map(|&idx| self.entries[idx].1)
    }

    #[must_use]
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.index.contains_key(date)
    }

    /// `(date, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, i64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.iter().map(|(date, _)| *date)
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all values
    #[must_use]
    pub fn total(&self) -> i64 {
        self.values().sum()
    }
}

impl Serialize for DatedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, value) in &self.entries {
            map.serialize_entry(&date.format(DATE_FORMAT).to_string(), value)?;
        }
        map.end()
    }
}
