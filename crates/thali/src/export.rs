//! Export of snapshot sections as delimited or JSON tables.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, ThaliError};
use crate::model::{Dataset, Section};

/// Output format for exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    /// File extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// One section as a JSON value, exactly as the wire contract serializes it.
pub fn section_value(dataset: &Dataset, section: Section) -> Result<Value> {
    let value = match section {
        Section::Cuisines => serde_json::to_value(&dataset.cuisines)?,
        Section::Cities => serde_json::to_value(&dataset.cities)?,
        Section::Ratings => serde_json::to_value(&dataset.rating_distribution)?,
        Section::Prices => serde_json::to_value(&dataset.price_segments)?,
        Section::Localities => serde_json::to_value(&dataset.localities)?,
        Section::ValuePoints => serde_json::to_value(&dataset.value_points)?,
    };
    Ok(value)
}

/// Write one section to `path` in the given format.
pub fn write_section(
    dataset: &Dataset,
    section: Section,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    match format {
        ExportFormat::Csv => write_delimited(dataset, section, b',', path),
        ExportFormat::Tsv => write_delimited(dataset, section, b'\t', path),
        ExportFormat::Json => {
            let contents = serde_json::to_string_pretty(&section_value(dataset, section)?)?;
            fs::write(path, contents).map_err(|e| ThaliError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

fn write_delimited(dataset: &Dataset, section: Section, delimiter: u8, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;

    // Headers come from the serde field names, so delimited output carries
    // the same column names as the JSON wire contract.
    match section {
        Section::Cuisines => {
            for record in &dataset.cuisines {
                writer.serialize(record)?;
            }
        }
        Section::Cities => {
            for record in &dataset.cities {
                writer.serialize(record)?;
            }
        }
        Section::Ratings => {
            for record in &dataset.rating_distribution {
                writer.serialize(record)?;
            }
        }
        Section::Prices => {
            for record in &dataset.price_segments {
                writer.serialize(record)?;
            }
        }
        Section::Localities => {
            for record in &dataset.localities {
                writer.serialize(record)?;
            }
        }
        Section::ValuePoints => {
            for record in &dataset.value_points {
                writer.serialize(record)?;
            }
        }
    }

    writer.flush().map_err(|e| ThaliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("TSV".parse::<ExportFormat>(), Ok(ExportFormat::Tsv));
        assert!("parquet".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_section_value_uses_wire_names() {
        let value = section_value(Dataset::builtin(), Section::Cuisines).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert!(first.get("avgRating").is_some());
        assert!(first.get("marketShare").is_some());
        assert!(first.get("avg_rating").is_none());
    }

    #[test]
    fn test_write_csv_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cuisines.csv");
        write_section(Dataset::builtin(), Section::Cuisines, ExportFormat::Csv, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("name,restaurants,avgRating,marketShare,avgCost")
        );
        assert!(contents.contains("North Indian,1247,4.2,18.6,850"));
    }

    #[test]
    fn test_write_json_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.json");
        write_section(Dataset::builtin(), Section::Ratings, ExportFormat::Json, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 6);
    }
}
