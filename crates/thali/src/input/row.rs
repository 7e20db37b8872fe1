//! A single raw restaurant record.

use serde::{Deserialize, Serialize};

/// One restaurant as it appears in a listings export.
///
/// Rating and pricing are optional; unrated rows are kept (they still count
/// toward totals) but are skipped by rating-dependent aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRow {
    pub name: String,
    /// Cuisine categories, split from the comma-separated category column.
    pub cuisines: Vec<String>,
    pub locality: String,
    pub city: String,
    pub area_type: Option<String>,
    /// Dining rating on the 0.0-5.0 scale.
    pub dining_rating: Option<f64>,
    /// Cost for two, whole rupees.
    pub pricing_for_2: Option<u32>,
    pub review_count: Option<u32>,
}

impl RestaurantRow {
    /// City is the trailing comma-separated segment of a full locality
    /// string ("Khan Market, New Delhi" -> "New Delhi"). A locality without
    /// a comma is its own city.
    pub fn city_from_locality(locality: &str) -> Option<&str> {
        locality
            .rsplit(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_from_locality() {
        assert_eq!(
            RestaurantRow::city_from_locality("Khan Market, New Delhi"),
            Some("New Delhi")
        );
        assert_eq!(RestaurantRow::city_from_locality("Gurgaon"), Some("Gurgaon"));
        assert_eq!(
            RestaurantRow::city_from_locality("Sector 29, DLF Phase 1, Gurgaon"),
            Some("Gurgaon")
        );
        assert_eq!(RestaurantRow::city_from_locality(""), None);
        assert_eq!(RestaurantRow::city_from_locality("  "), None);
    }
}
