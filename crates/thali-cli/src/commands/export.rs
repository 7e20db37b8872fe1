//! Export command - write snapshot sections as tables.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use thali::{ExportFormat, Section, export};

use super::load_snapshot;

pub fn run(
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    format: ExportFormat,
    section: Option<Section>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_snapshot(&file)?;

    let out_dir = output.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)?;

    let sections: Vec<Section> = match section {
        Some(s) => vec![s],
        None => Section::ALL.to_vec(),
    };

    println!(
        "{} {} section(s) from '{}' as {}",
        "Exporting".cyan().bold(),
        sections.len().to_string().white().bold(),
        dataset.meta.label,
        format
    );

    for section in &sections {
        let path = out_dir.join(format!("{}.{}", section.name(), format.extension()));
        export::write_section(&dataset, *section, format, &path)?;
        if verbose {
            println!("  {} {}", "wrote".green(), path.display());
        }
    }

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        out_dir.display().to_string().white()
    );

    Ok(())
}
