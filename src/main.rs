use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use vaxx_cases::utils::logging::console::{print_comparison_summary, print_sample_rows};
use vaxx_cases::utils::logging::{log_estimate_summary, log_warning};
use vaxx_cases::{
    EstimatorConfig, OutputFormat, compare_with_reference, estimate_vaccinated_cases,
    load_region_file, write_comparison,
};

#[derive(Parser)]
#[command(name = "vaxx-cases")]
#[command(
    about = "Estimate COVID-19 cases in fully vaccinated individuals and compare with reported figures",
    long_about = None
)]
struct Cli {
    /// Region CSV file (date, reference, cumulative vaccinated, cumulative cases)
    #[arg(short, long)]
    input: PathBuf,

    /// Region name, matched case-insensitively against the configuration
    #[arg(short, long)]
    region: String,

    /// Config TOML file (defaults to the bundled regions and vaccine mix)
    #[arg(short, long, env = "VAXX_CASES_CONFIG")]
    config: Option<PathBuf>,

    /// Output format: table, csv or json
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start = Instant::now();

    let config = match &cli.config {
        Some(path) => EstimatorConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => EstimatorConfig::default(),
    };
    let region = config.region(&cli.region)?;

    let data = load_region_file(&cli.input)
        .with_context(|| format!("Failed to load region data from {}", cli.input.display()))?;
    if data.reference.is_empty() {
        log_warning("No reference figures found in", Some(cli.input.as_path()));
    }
    if let Some((first, last)) = data.records.date_span() {
        info!(
            "{}: {} records from {} to {}",
            region.name,
            data.records.len(),
            first,
            last
        );
    }

    let estimate = estimate_vaccinated_cases(&data.records, &region, &config.vaccine_mix)
        .with_context(|| format!("Failed to estimate vaccinated cases for {}", region.name))?;
    let comparison = compare_with_reference(&region.name, &estimate, &data.reference);
    log_estimate_summary(&region.name, &comparison.summary);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_comparison(&comparison, cli.format, &mut writer)?;
            writer.flush()?;
            info!("Wrote {} output to {}", cli.format, path.display());
            print_comparison_summary(&comparison);
            print_sample_rows(&comparison, 5);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_comparison(&comparison, cli.format, &mut writer)?;
            writer.flush()?;
        }
    }

    info!("Completed in {:?}", start.elapsed());
    Ok(())
}
