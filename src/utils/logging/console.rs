//! Console output utilities

use itertools::Itertools;

use crate::algorithm::vaccination::Comparison;

/// Print the comparison summary to stdout
pub fn print_comparison_summary(comparison: &Comparison) {
    let summary = &comparison.summary;
    println!("Region: {}", comparison.region);
    println!(
        "Days: {} ({} with reference)",
        summary.days, summary.days_with_reference
    );
    println!("Total estimated: {}", summary.total_estimated);
    println!("Total reference: {}", summary.total_reference);
    if let Some(mae) = summary.mean_absolute_error {
        println!("Mean absolute difference: {mae:.2}");
    }
    if let Some((date, diff)) = summary.largest_difference {
        println!("Largest difference: {diff:+} on {date}");
    }
}

/// Print the first `num_rows` rows of a comparison
pub fn print_sample_rows(comparison: &Comparison, num_rows: usize) {
    println!("First {num_rows} rows:");
    for row in comparison.rows.iter().take(num_rows) {
        let cells = [
            row.date.to_string(),
            row.estimated.to_string(),
            row.reference.map_or_else(|| "-".to_string(), |r| r.to_string()),
        ];
        println!("  [{}]", cells.iter().join(", "));
    }
}
