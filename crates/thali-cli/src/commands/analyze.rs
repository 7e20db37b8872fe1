//! Analyze command - ingest raw listings and build a snapshot.

use std::path::PathBuf;

use colored::Colorize;
use thali::{Analytics, AnalyticsConfig, format};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    min_cuisine_count: u32,
    top_cuisines: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        file.display().to_string().white()
    );

    let mut config = AnalyticsConfig::default();
    config.aggregate.min_cuisine_count = min_cuisine_count;
    config.aggregate.top_cuisines = top_cuisines;

    let analytics = Analytics::with_config(config);
    let report = analytics.analyze(&file)?;

    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  Format: {}", report.source.format);
        println!(
            "  Rows:   {}",
            format::group_thousands(report.source.row_count as u64)
        );
        println!("  Hash:   {}", report.source.hash);
        println!();
    }

    let metrics = report.dataset.key_metrics();
    println!(
        "Aggregated {} restaurants across {} cities",
        format::group_thousands(metrics.total_restaurants as u64)
            .white()
            .bold(),
        metrics.cities
    );

    let counts = &report.summary.observations_by_severity;
    println!(
        "Found {} observations ({} errors, {} warnings, {} info)",
        report.observations.len().to_string().white().bold(),
        counts.error.to_string().red(),
        counts.warning.to_string().yellow(),
        counts.info.to_string().blue()
    );

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let mut p = file.clone();
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        p.set_file_name(format!("{}.dashboard.json", stem));
        p
    });

    report.dataset.save(&output_path)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    println!();
    println!(
        "Data quality score: {:.0}%",
        report.summary.data_quality_score * 100.0
    );

    if report.observations.is_empty() {
        println!("{}", "No issues found - snapshot looks clean!".green());
    } else {
        println!(
            "Run {} to inspect the findings",
            format!("thali check {}", output_path.display()).cyan().bold()
        );
    }

    Ok(())
}
