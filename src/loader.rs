//! Region CSV loading
//!
//! Region files have a header row followed by one row per date with the columns
//! `date, reference_estimate, cumulative_vaccinated_people, cumulative_cases`.
//! Columns are read by position; header names are not checked.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io;
use std::path::Path;
use std::time::Instant;

use crate::error::util::safe_open_file;
use crate::error::{Error, Result};
use crate::models::{DATE_FORMAT, DailyRecord, DailySeries, ReferenceSeries};
use crate::utils::logging::{log_operation_complete, log_operation_start};

const DATE_COLUMN: usize = 0;
const REFERENCE_COLUMN: usize = 1;
const VACCINATED_COLUMN: usize = 2;
const CASES_COLUMN: usize = 3;

/// Everything read from one region file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionData {
    /// Records in file order
    pub records: DailySeries,
    /// Reference counts among the fully vaccinated, in file order
    pub reference: ReferenceSeries,
}

/// Load records and reference counts from a region file
pub fn load_region_file(path: &Path) -> Result<RegionData> {
    let start = Instant::now();
    log_operation_start("Loading region data from", path);

    let file = safe_open_file(path, "loading region case data")?;
    let data = read_region_data(file)?;

    log_operation_complete("loaded", path, data.records.len(), Some(start.elapsed()));
    Ok(data)
}

/// Load only the daily records from a region file
pub fn load_daily_records(path: &Path) -> Result<DailySeries> {
    let file = safe_open_file(path, "loading daily case records")?;
    let records = read_daily_records(file)?;
    log::debug!("Read {} daily records from {}", records.len(), path.display());
    Ok(records)
}

/// Load only the reference counts from a region file
pub fn load_reference_series(path: &Path) -> Result<ReferenceSeries> {
    let file = safe_open_file(path, "loading reference counts")?;
    let reference = read_reference_series(file)?;
    log::debug!(
        "Read {} reference counts from {}",
        reference.len(),
        path.display()
    );
    Ok(reference)
}

/// Parse records and reference counts from CSV text
pub fn read_region_data<R: io::Read>(reader: R) -> Result<RegionData> {
    let mut records = Vec::new();
    let mut reference = ReferenceSeries::new();

    for_each_row(reader, CASES_COLUMN + 1, |line, date, row| {
        reference.push(date, parse_reference(row, date, line)?)?;
        records.push(parse_record(row, date, line)?);
        Ok(())
    })?;

    Ok(RegionData {
        records: DailySeries::new(records)?,
        reference,
    })
}

/// Parse daily records from CSV text
pub fn read_daily_records<R: io::Read>(reader: R) -> Result<DailySeries> {
    let mut records = Vec::new();
    for_each_row(reader, CASES_COLUMN + 1, |line, date, row| {
        records.push(parse_record(row, date, line)?);
        Ok(())
    })?;
    DailySeries::new(records)
}

/// Parse reference counts from CSV text
pub fn read_reference_series<R: io::Read>(reader: R) -> Result<ReferenceSeries> {
    let mut reference = ReferenceSeries::new();
    for_each_row(reader, REFERENCE_COLUMN + 1, |line, date, row| {
        reference.push(date, parse_reference(row, date, line)?)
    })?;
    Ok(reference)
}

/// Run `handle` on every data row with its 1-based line number and parsed date
fn for_each_row<R, F>(reader: R, min_fields: usize, mut handle: F) -> Result<()>
where
    R: io::Read,
    F: FnMut(usize, NaiveDate, &StringRecord) -> Result<()>,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    for (idx, result) in csv_reader.records().enumerate() {
        let row = result?;
        let line = idx + 1;

        if row.iter().all(str::is_empty) {
            continue;
        }
        if row.len() < min_fields {
            return Err(Error::malformed_undated(format!(
                "line {line} has {} fields, expected at least {min_fields}",
                row.len()
            )));
        }

        let date = parse_date(&row[DATE_COLUMN])?;
        handle(line, date, &row)?;
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| Error::DateParse {
        value: value.to_string(),
        source,
    })
}

fn parse_record(row: &StringRecord, date: NaiveDate, line: usize) -> Result<DailyRecord> {
    DailyRecord::new(
        date,
        parse_count(row, VACCINATED_COLUMN, line)?,
        parse_count(row, CASES_COLUMN, line)?,
    )
}

fn parse_reference(row: &StringRecord, date: NaiveDate, line: usize) -> Result<i64> {
    let value = parse_count(row, REFERENCE_COLUMN, line)?;
    if value < 0 {
        return Err(Error::malformed(
            date,
            format!("negative reference count on line {line}: {value}"),
        ));
    }
    Ok(value)
}

fn parse_count(row: &StringRecord, column: usize, line: usize) -> Result<i64> {
    let value = &row[column];
    value.parse::<i64>().map_err(|_| Error::NumberParse {
        value: value.to_string(),
        line,
    })
}
