//! Wire-contract record types for the six dashboard sections.
//!
//! Field names (through serde renames), units and scales are the input
//! contract every data source must honor: currency in whole rupees,
//! percentages pre-scaled 0-100, ratings on the 0.0-5.0 scale.

use serde::{Deserialize, Serialize};

/// Aggregate statistics for one cuisine category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineStat {
    /// Cuisine name as listed (e.g. "North Indian").
    pub name: String,
    /// Number of restaurants serving this cuisine.
    pub restaurants: u32,
    /// Mean dining rating across those restaurants.
    pub avg_rating: f64,
    /// Share of all restaurants, percent.
    pub market_share: f64,
    /// Mean cost for two, whole rupees.
    pub avg_cost: u32,
}

/// Aggregate statistics for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStat {
    pub name: String,
    /// Number of restaurants in the city.
    pub count: u32,
    /// Mean dining rating.
    pub avg_rating: f64,
    /// Number of distinct localities covered.
    pub localities: u32,
    /// Display color (hex) for pie/legend rendering.
    pub color: String,
}

/// One bucket of the rating distribution histogram.
///
/// Bucket boundaries are fixed and non-overlapping; see
/// [`RatingBand`](crate::classify::RatingBand) for the canonical bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    /// Bucket label, e.g. "Good (4.0-4.4)".
    #[serde(rename = "rating")]
    pub label: String,
    pub count: u32,
    /// Share of rated restaurants, percent.
    pub percentage: f64,
}

/// One pricing tier of the price-segment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSegment {
    /// Tier label, e.g. "Mid-Range (₹500-1000)".
    pub segment: String,
    pub count: u32,
    pub avg_rating: f64,
    /// Share of priced restaurants, percent.
    pub percentage: f64,
}

/// Aggregate statistics for one locality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalityStat {
    pub locality: String,
    pub city: String,
    pub avg_rating: f64,
    pub restaurants: u32,
    /// Area classification tag, e.g. "Commercial".
    pub area_type: String,
}

/// A single (cost, rating) sample for scatter-style value analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    /// Cost for two, whole rupees.
    pub cost: u32,
    /// Mean rating at this cost level.
    pub rating: f64,
    /// Restaurants sampled at this cost level.
    pub restaurants: u32,
    /// Qualitative label, e.g. "Good Value".
    pub category: String,
}
