//! Test fixtures
//!
//! Small data sets in the region file layout and helpers to put them on disk.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::{DailyRecord, DailySeries};

/// Two days of Ontario data in the region file layout
pub const ONTARIO_SAMPLE_CSV: &str = "\
date,cases_in_fully_vaxx,total_vaccinated,total_cases
2021-08-09,24,9343260,552804
2021-08-10,170,1000000,600000
";

/// The records of [`ONTARIO_SAMPLE_CSV`]
pub fn ontario_sample_series() -> Result<DailySeries> {
    DailySeries::new(vec![
        DailyRecord::from_ymd(2021, 8, 9, 9_343_260, 552_804)?,
        DailyRecord::from_ymd(2021, 8, 10, 1_000_000, 600_000)?,
    ])
}

/// Write `contents` as a region file named `name` inside `dir`
pub fn write_region_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    write_file(dir, name, contents)
}

/// Write `contents` as a TOML config file named `name` inside `dir`
pub fn write_config_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    write_file(dir, name, contents)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}
