//! Snapshot container, persistence and the embedded default dataset.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::records::{CityStat, CuisineStat, LocalityStat, PriceSegment, RatingBucket, ValuePoint};
use crate::error::{Result, ThaliError};

/// The snapshot shipped with the library: Delhi NCR listings, pre-aggregated.
static BUILTIN: Lazy<Dataset> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../assets/ncr.json"))
        .expect("embedded snapshot parses")
});

/// Metadata describing one dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    /// Human-readable snapshot label, e.g. "Delhi NCR".
    pub label: String,
    /// Where the numbers came from.
    pub source: String,
    /// Total records behind the aggregates.
    pub records: u32,
    /// Headline mean rating across all rated records.
    pub average_rating: f64,
    /// When the snapshot was built.
    pub generated_at: DateTime<Utc>,
    /// SHA-256 of the ingested source file, when built from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// One complete, immutable analytics snapshot.
///
/// Array order is preserved end to end (memory and wire); rendering relies
/// on it for stable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub meta: SnapshotMeta,
    pub cuisines: Vec<CuisineStat>,
    pub cities: Vec<CityStat>,
    pub rating_distribution: Vec<RatingBucket>,
    pub price_segments: Vec<PriceSegment>,
    pub localities: Vec<LocalityStat>,
    pub value_points: Vec<ValuePoint>,
}

impl Dataset {
    /// The embedded default snapshot.
    pub fn builtin() -> &'static Dataset {
        &BUILTIN
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ThaliError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save this snapshot as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| ThaliError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Headline metrics for the dashboard cards, derived at display time.
    pub fn key_metrics(&self) -> KeyMetrics {
        KeyMetrics {
            total_restaurants: self.meta.records,
            average_rating: self.meta.average_rating,
            top_cuisine: self.cuisines.first().map(|c| c.name.clone()),
            top_cuisine_restaurants: self.cuisines.first().map(|c| c.restaurants),
            cities: self.cities.len(),
            top_city: self.cities.first().map(|c| c.name.clone()),
            top_city_count: self.cities.first().map(|c| c.count),
        }
    }

    /// True when every section is empty.
    pub fn is_empty(&self) -> bool {
        self.cuisines.is_empty()
            && self.cities.is_empty()
            && self.rating_distribution.is_empty()
            && self.price_segments.is_empty()
            && self.localities.is_empty()
            && self.value_points.is_empty()
    }
}

/// Headline numbers shown in the dashboard metric cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub total_restaurants: u32,
    pub average_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_cuisine_restaurants: Option<u32>,
    pub cities: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_city_count: Option<u32>,
}

/// Addressable dataset section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Cuisines,
    Cities,
    Ratings,
    Prices,
    Localities,
    ValuePoints,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Cuisines,
        Section::Cities,
        Section::Ratings,
        Section::Prices,
        Section::Localities,
        Section::ValuePoints,
    ];

    /// Stable name used in file names and API paths.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Cuisines => "cuisines",
            Section::Cities => "cities",
            Section::Ratings => "ratings",
            Section::Prices => "prices",
            Section::Localities => "localities",
            Section::ValuePoints => "value_points",
        }
    }

    /// Display title for card headers.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Cuisines => "Top Cuisines",
            Section::Cities => "City Performance",
            Section::Ratings => "Rating Distribution",
            Section::Prices => "Price Segments",
            Section::Localities => "Top Localities",
            Section::ValuePoints => "Value Analysis",
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "cuisines" | "cuisine" => Ok(Section::Cuisines),
            "cities" | "city" => Ok(Section::Cities),
            "ratings" | "rating_distribution" => Ok(Section::Ratings),
            "prices" | "price_segments" => Ok(Section::Prices),
            "localities" | "locality" => Ok(Section::Localities),
            "value_points" | "values" => Ok(Section::ValuePoints),
            _ => Err(format!(
                "Unknown section: {}. Use: cuisines, cities, ratings, prices, localities, or value_points.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
