//! Example: Build a dashboard report from a restaurant listings file.
//!
//! Usage:
//!   cargo run --example report -- <file_path>
//!
//! Example:
//!   cargo run --example report -- listings/ncr_restaurants.csv

use std::env;
use std::path::Path;

use thali::{Analytics, RatingClass, Severity, format};

fn main() -> thali::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example report -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example report -- listings/ncr_restaurants.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Dashboard Report: {}", file_path);
    println!("{}", separator);
    println!();

    let analytics = Analytics::new();
    let report = analytics.analyze(path)?;

    println!("## Source Metadata");
    println!("  File: {}", report.source.file);
    println!("  Format: {}", report.source.format);
    println!("  Rows: {}", format::group_thousands(report.source.row_count as u64));
    println!("  Hash: {}", report.source.hash);
    println!();

    let metrics = report.dataset.key_metrics();
    println!("## Headline Metrics");
    println!(
        "  Restaurants: {}",
        format::group_thousands(metrics.total_restaurants as u64)
    );
    println!("  Average rating: {}", format::rating(metrics.average_rating));
    if let (Some(name), Some(count)) = (&metrics.top_cuisine, metrics.top_cuisine_restaurants) {
        println!(
            "  Top cuisine: {} ({} restaurants)",
            name,
            format::group_thousands(count as u64)
        );
    }
    println!("  Cities: {}", metrics.cities);
    println!();

    println!("## Top Cuisines ({})", report.dataset.cuisines.len());
    println!();
    for cuisine in &report.dataset.cuisines {
        let class = RatingClass::for_rating(cuisine.avg_rating);
        println!(
            "  {:20} {:>6} restaurants  {:>5}  {:>6}  {:>6}  {}",
            cuisine.name,
            format::group_thousands(cuisine.restaurants as u64),
            format::rating(cuisine.avg_rating),
            format::percentage(cuisine.market_share),
            format::currency(cuisine.avg_cost as u64),
            class.label()
        );
    }
    println!();

    println!("## Observations ({} total)", report.observations.len());
    println!();
    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        let matching: Vec<_> = report
            .observations
            .iter()
            .filter(|o| o.severity == severity)
            .collect();
        if matching.is_empty() {
            continue;
        }
        println!("### {} ({}):", severity.label(), matching.len());
        for obs in matching {
            println!("  [{}] {} - {}", obs.section, obs.description, obs.check.label());
        }
        println!();
    }

    println!("## Summary");
    println!(
        "  Quality Score: {:.1}%",
        report.summary.data_quality_score * 100.0
    );
    println!("  Sections with issues: {}", report.summary.sections_with_issues);
    println!("  Recommendation: {}", report.summary.recommendation);
    println!();

    println!("{}", separator);

    Ok(())
}
