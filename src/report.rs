//! Writing comparisons for plotting and inspection
//!
//! The same rows can be written as an aligned text table, as CSV with the columns
//! `date,estimated,reference,difference`, or as pretty-printed JSON.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::algorithm::vaccination::Comparison;
use crate::error::{Error, Result};
use crate::models::DATE_FORMAT;

/// Output format for a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidConfig(format!(
                "unknown output format '{other}' (expected table, csv or json)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Write `comparison` to `writer` in `format`
pub fn write_comparison<W: io::Write>(
    comparison: &Comparison,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(comparison, writer),
        OutputFormat::Csv => write_csv(comparison, writer),
        OutputFormat::Json => write_json(comparison, writer),
    }
}

/// CSV with one row per date; missing reference values are empty cells
pub fn write_csv<W: io::Write>(comparison: &Comparison, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["date", "estimated", "reference", "difference"])?;
    for row in &comparison.rows {
        csv_writer.write_record([
            row.date.format(DATE_FORMAT).to_string(),
            row.estimated.to_string(),
            optional_cell(row.reference),
            optional_cell(row.difference),
        ])?;
    }
    csv_writer
        .flush()
        .map_err(|e| Error::io("<csv output>", e))?;
    Ok(())
}

pub fn write_json<W: io::Write>(comparison: &Comparison, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, comparison)?;
    Ok(())
}

/// Aligned text table followed by the summary
pub fn write_table<W: io::Write>(comparison: &Comparison, mut writer: W) -> Result<()> {
    let out = |e| Error::io("<table output>", e);

    writeln!(
        writer,
        "Estimated vs reference cases in fully vaccinated individuals: {}",
        comparison.region
    )
    .map_err(out)?;
    writeln!(
        writer,
        "{:<12} {:>10} {:>10} {:>11}",
        "date", "estimated", "reference", "difference"
    )
    .map_err(out)?;
    for row in &comparison.rows {
        writeln!(
            writer,
            "{:<12} {:>10} {:>10} {:>11}",
            row.date.format(DATE_FORMAT).to_string(),
            row.estimated,
            optional_cell(row.reference),
            optional_cell(row.difference),
        )
        .map_err(out)?;
    }

    let summary = &comparison.summary;
    writeln!(writer).map_err(out)?;
    writeln!(
        writer,
        "days: {} (with reference: {})",
        summary.days, summary.days_with_reference
    )
    .map_err(out)?;
    writeln!(
        writer,
        "total estimated: {}  total reference: {}",
        summary.total_estimated, summary.total_reference
    )
    .map_err(out)?;
    if let Some(mae) = summary.mean_absolute_error {
        writeln!(writer, "mean absolute difference: {mae:.2}").map_err(out)?;
    }
    Ok(())
}

fn optional_cell(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
