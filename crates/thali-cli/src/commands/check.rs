//! Check command - data-quality report for a snapshot.

use std::path::PathBuf;

use colored::Colorize;
use thali::{Analytics, Severity};

use super::load_snapshot;

pub fn run(
    file: Option<PathBuf>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_snapshot(&file)?;

    let analytics = Analytics::new();
    let (observations, summary) = analytics.check(&dataset);

    if json_output {
        let status = serde_json::json!({
            "snapshot": dataset.meta.label,
            "source": dataset.meta.source,
            "records": dataset.meta.records,
            "observations": observations,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Quality report for".cyan().bold(),
        dataset.meta.label.white()
    );
    println!();

    let counts = &summary.observations_by_severity;
    println!("{}", "Observations:".yellow().bold());
    println!("  Errors:   {}", counts.error.to_string().red());
    println!("  Warnings: {}", counts.warning.to_string().yellow());
    println!("  Info:     {}", counts.info.to_string().blue());
    println!();

    if !observations.is_empty() {
        println!("{}", "Findings:".yellow().bold());
        for obs in &observations {
            let severity = match obs.severity {
                Severity::Error => obs.severity.label().red(),
                Severity::Warning => obs.severity.label().yellow(),
                Severity::Info => obs.severity.label().blue(),
            };
            println!("  [{}] {}: {}", severity, obs.section, obs.description);
            if verbose {
                if let (Some(expected), Some(actual)) = (obs.expected, obs.actual) {
                    println!("        expected {:.1}, got {:.1}", expected, actual);
                }
            }
        }
        println!();
    }

    let score = summary.data_quality_score * 100.0;
    let score_text = format!("{:.0}", score);
    let score_colored = if score >= 80.0 {
        score_text.green()
    } else if score >= 50.0 {
        score_text.yellow()
    } else {
        score_text.red()
    };
    println!("Data quality score: {}%", score_colored);
    println!();

    if observations.is_empty() {
        println!("{}", "Snapshot is clean - ready to publish!".green().bold());
    } else {
        println!("{}", summary.recommendation);
    }

    Ok(())
}
