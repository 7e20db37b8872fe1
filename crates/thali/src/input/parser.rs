//! CSV/TSV ingestion with delimiter detection and header mapping.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::row::RestaurantRow;
use super::source::SourceMetadata;
use crate::error::{Result, ThaliError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Accepted header spellings per field, lowercased.
const NAME_HEADERS: &[&str] = &["restaurant_name", "name"];
const CATEGORY_HEADERS: &[&str] = &["category", "cuisines", "cuisine"];
const LOCALITY_HEADERS: &[&str] = &["locality"];
const CITY_HEADERS: &[&str] = &["city"];
const AREA_TYPE_HEADERS: &[&str] = &["area_type"];
const RATING_HEADERS: &[&str] = &["dining_rating", "rating"];
const PRICE_HEADERS: &[&str] = &["pricing_for_2", "price_for_two", "cost_for_two"];
const REVIEW_HEADERS: &[&str] = &["dining_review_count", "review_count", "reviews"];

/// Declared rating scale for listings input.
const RATING_RANGE: (f64, f64) = (0.0, 5.0);

/// Ingestion configuration.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses restaurant listings files into [`RestaurantRow`]s.
pub struct Ingestor {
    config: IngestConfig,
}

impl Ingestor {
    /// Create a new ingestor with default configuration.
    pub fn new() -> Self {
        Self {
            config: IngestConfig::default(),
        }
    }

    /// Create an ingestor with custom configuration.
    pub fn with_config(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Ingest a file and return the rows and source metadata.
    pub fn ingest_file(&self, path: impl AsRef<Path>) -> Result<(Vec<RestaurantRow>, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| ThaliError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let metadata = file.metadata().map_err(|e| ThaliError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = metadata.len();

        // Read entire file for hashing and parsing
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| ThaliError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let rows = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let source = SourceMetadata::new(path.to_path_buf(), hash, size_bytes, format, rows.len());

        Ok((rows, source))
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Vec<RestaurantRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        let columns = ColumnMap::from_headers(&headers)?;

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if rows.len() >= max {
                    break;
                }
            }

            let record = result?;
            rows.push(columns.read_row(row_idx, &record)?);
        }

        if rows.is_empty() {
            return Err(ThaliError::EmptyData("No data rows found".to_string()));
        }

        Ok(rows)
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

/// Column positions resolved from the header row.
struct ColumnMap {
    name: usize,
    category: usize,
    locality: usize,
    city: Option<usize>,
    area_type: Option<usize>,
    rating: Option<usize>,
    price: Option<usize>,
    reviews: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |candidates: &[&str]| -> Option<usize> {
            headers.iter().position(|h| {
                let h = h.trim().to_lowercase();
                candidates.iter().any(|c| h == *c)
            })
        };

        let name = find(NAME_HEADERS)
            .ok_or_else(|| ThaliError::MissingColumn("restaurant_name".to_string()))?;
        let category =
            find(CATEGORY_HEADERS).ok_or_else(|| ThaliError::MissingColumn("category".to_string()))?;
        let locality =
            find(LOCALITY_HEADERS).ok_or_else(|| ThaliError::MissingColumn("locality".to_string()))?;

        Ok(Self {
            name,
            category,
            locality,
            city: find(CITY_HEADERS),
            area_type: find(AREA_TYPE_HEADERS),
            rating: find(RATING_HEADERS),
            price: find(PRICE_HEADERS),
            reviews: find(REVIEW_HEADERS),
        })
    }

    fn read_row(&self, row_idx: usize, record: &csv::StringRecord) -> Result<RestaurantRow> {
        let get = |i: usize| record.get(i).unwrap_or("").trim();
        let get_opt = |i: Option<usize>| i.map(get).filter(|s| !is_null_value(s));

        let locality = get(self.locality).to_string();
        let city = match get_opt(self.city) {
            Some(c) => c.to_string(),
            None => RestaurantRow::city_from_locality(&locality)
                .unwrap_or("")
                .to_string(),
        };

        let cuisines: Vec<String> = get(self.category)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let dining_rating = parse_optional_f64(get_opt(self.rating), row_idx, "dining_rating")?;
        if let Some(r) = dining_rating {
            let (min, max) = RATING_RANGE;
            if !r.is_finite() || r < min || r > max {
                return Err(ThaliError::OutOfRange {
                    field: "dining_rating".to_string(),
                    value: r,
                    min,
                    max,
                });
            }
        }

        Ok(RestaurantRow {
            name: get(self.name).to_string(),
            cuisines,
            locality,
            city,
            area_type: get_opt(self.area_type).map(String::from),
            dining_rating,
            pricing_for_2: parse_optional_u32(get_opt(self.price), row_idx, "pricing_for_2")?,
            review_count: parse_optional_u32(get_opt(self.reviews), row_idx, "review_count")?,
        })
    }
}

fn parse_optional_f64(value: Option<&str>, row_idx: usize, field: &str) -> Result<Option<f64>> {
    match value {
        None => Ok(None),
        Some(s) => s.parse::<f64>().map(Some).map_err(|_| ThaliError::MalformedRecord {
            row: row_idx,
            message: format!("{} is not a number: '{}'", field, s),
        }),
    }
}

fn parse_optional_u32(value: Option<&str>, row_idx: usize, field: &str) -> Result<Option<u32>> {
    match value {
        None => Ok(None),
        // Costs sometimes arrive as "850.0"; accept and truncate.
        Some(s) => match s.parse::<u32>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => s
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v as u32)
                .map(Some)
                .ok_or_else(|| ThaliError::MalformedRecord {
                    row: row_idx,
                    message: format!("{} is not a count: '{}'", field, s),
                }),
        },
    }
}

/// Check if a value represents a missing/null value.
fn is_null_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed == "."
        || trimmed == "-"
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ThaliError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines beat raw frequency
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
