//! Aggregation from raw restaurant rows to dashboard sections.
//!
//! Single-pass, deterministic builders. Group order is first-seen
//! (IndexMap) until the documented sort is applied, so equal inputs always
//! produce identical snapshots.

use std::collections::HashSet;

use chrono::Utc;
use indexmap::IndexMap;

use crate::classify::{PriceTier, RatingBand, ValueCategory};
use crate::input::RestaurantRow;
use crate::model::{
    CityStat, CuisineStat, Dataset, LocalityStat, PriceSegment, RatingBucket, SnapshotMeta,
    ValuePoint,
};

/// Display palette cycled over cities in rank order.
const CITY_COLORS: &[&str] = &["#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#8dd1e1"];

/// Cost anchors for the value scatter, whole rupees.
const COST_ANCHORS: &[u32] = &[300, 500, 750, 1000, 1500, 2000, 3000, 4500];

/// Aggregation configuration.
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    /// Cuisines with fewer restaurants than this are dropped.
    pub min_cuisine_count: u32,
    /// How many cuisines to keep, by restaurant count.
    pub top_cuisines: usize,
    /// Localities with fewer rated restaurants than this are dropped.
    pub min_locality_count: u32,
    /// How many localities to keep, by rating.
    pub top_localities: usize,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            min_cuisine_count: 5,
            top_cuisines: 8,
            min_locality_count: 3,
            top_localities: 10,
        }
    }
}

/// Builds dashboard sections from raw rows.
pub struct Aggregator {
    config: AggregateConfig,
}

impl Aggregator {
    /// Create an aggregator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AggregateConfig::default(),
        }
    }

    /// Create an aggregator with custom configuration.
    pub fn with_config(config: AggregateConfig) -> Self {
        Self { config }
    }

    /// Build a complete snapshot from rows.
    pub fn build_dataset(
        &self,
        rows: &[RestaurantRow],
        label: impl Into<String>,
        source: impl Into<String>,
        source_hash: Option<String>,
    ) -> Dataset {
        let mut rating = MeanAcc::default();
        for row in rows {
            if let Some(r) = row.dining_rating {
                rating.push(r);
            }
        }

        let meta = SnapshotMeta {
            label: label.into(),
            source: source.into(),
            records: rows.len() as u32,
            average_rating: round2(rating.mean()),
            generated_at: Utc::now(),
            source_hash,
        };

        Dataset {
            meta,
            cuisines: self.cuisine_stats(rows),
            cities: self.city_stats(rows),
            rating_distribution: self.rating_distribution(rows),
            price_segments: self.price_segments(rows),
            localities: self.locality_stats(rows),
            value_points: self.value_points(rows),
        }
    }

    /// Cuisine counts with mean rating, mean cost and market share.
    ///
    /// A restaurant listing several cuisines counts once per cuisine; market
    /// share stays relative to the total row count.
    pub fn cuisine_stats(&self, rows: &[RestaurantRow]) -> Vec<CuisineStat> {
        #[derive(Default)]
        struct Acc {
            restaurants: u32,
            rating: MeanAcc,
            cost: MeanAcc,
        }

        let total = rows.len();
        let mut groups: IndexMap<String, Acc> = IndexMap::new();

        for row in rows {
            for cuisine in &row.cuisines {
                let acc = groups.entry(cuisine.clone()).or_default();
                acc.restaurants += 1;
                if let Some(r) = row.dining_rating {
                    acc.rating.push(r);
                }
                if let Some(c) = row.pricing_for_2 {
                    acc.cost.push(c as f64);
                }
            }
        }

        let mut stats: Vec<CuisineStat> = groups
            .into_iter()
            .filter(|(_, acc)| acc.restaurants >= self.config.min_cuisine_count)
            .map(|(name, acc)| CuisineStat {
                name,
                restaurants: acc.restaurants,
                avg_rating: round2(acc.rating.mean()),
                market_share: if total == 0 {
                    0.0
                } else {
                    round1(acc.restaurants as f64 * 100.0 / total as f64)
                },
                avg_cost: acc.cost.mean().round() as u32,
            })
            .collect();

        stats.sort_by(|a, b| {
            b.restaurants
                .cmp(&a.restaurants)
                .then(b.avg_rating.total_cmp(&a.avg_rating))
        });
        stats.truncate(self.config.top_cuisines);
        stats
    }

    /// Per-city counts, mean rating and distinct-locality coverage,
    /// largest market first. Colors are assigned by rank.
    pub fn city_stats(&self, rows: &[RestaurantRow]) -> Vec<CityStat> {
        #[derive(Default)]
        struct Acc {
            count: u32,
            rating: MeanAcc,
            localities: HashSet<String>,
        }

        let mut groups: IndexMap<String, Acc> = IndexMap::new();

        for row in rows {
            if row.city.is_empty() {
                continue;
            }
            let acc = groups.entry(row.city.clone()).or_default();
            acc.count += 1;
            if let Some(r) = row.dining_rating {
                acc.rating.push(r);
            }
            acc.localities.insert(row.locality.clone());
        }

        let mut stats: Vec<CityStat> = groups
            .into_iter()
            .map(|(name, acc)| CityStat {
                name,
                count: acc.count,
                avg_rating: round2(acc.rating.mean()),
                localities: acc.localities.len() as u32,
                color: String::new(),
            })
            .collect();

        stats.sort_by(|a, b| b.count.cmp(&a.count));
        for (rank, stat) in stats.iter_mut().enumerate() {
            stat.color = CITY_COLORS[rank % CITY_COLORS.len()].to_string();
        }
        stats
    }

    /// Rating histogram over the fixed bands, in band order.
    pub fn rating_distribution(&self, rows: &[RestaurantRow]) -> Vec<RatingBucket> {
        let mut counts: IndexMap<RatingBand, u32> =
            RatingBand::ALL.iter().map(|b| (*b, 0)).collect();

        let mut rated = 0u32;
        for row in rows {
            if let Some(r) = row.dining_rating {
                rated += 1;
                *counts.entry(RatingBand::for_rating(r)).or_insert(0) += 1;
            }
        }

        counts
            .into_iter()
            .map(|(band, count)| RatingBucket {
                label: band.label().to_string(),
                count,
                percentage: share(count, rated),
            })
            .collect()
    }

    /// Price-tier breakdown with mean rating per tier, cheapest tier first.
    pub fn price_segments(&self, rows: &[RestaurantRow]) -> Vec<PriceSegment> {
        #[derive(Default)]
        struct Acc {
            count: u32,
            rating: MeanAcc,
        }

        let mut tiers: IndexMap<PriceTier, Acc> =
            PriceTier::ALL.iter().map(|t| (*t, Acc::default())).collect();

        let mut priced = 0u32;
        for row in rows {
            if let Some(cost) = row.pricing_for_2 {
                priced += 1;
                let acc = tiers.entry(PriceTier::for_cost(cost)).or_default();
                acc.count += 1;
                if let Some(r) = row.dining_rating {
                    acc.rating.push(r);
                }
            }
        }

        tiers
            .into_iter()
            .map(|(tier, acc)| PriceSegment {
                segment: tier.label().to_string(),
                count: acc.count,
                avg_rating: round2(acc.rating.mean()),
                percentage: share(acc.count, priced),
            })
            .collect()
    }

    /// Top localities by mean rating. Only rated rows participate, mirroring
    /// the upstream listing joins.
    pub fn locality_stats(&self, rows: &[RestaurantRow]) -> Vec<LocalityStat> {
        #[derive(Default)]
        struct Acc {
            count: u32,
            rating: MeanAcc,
            area_type: Option<String>,
        }

        let mut groups: IndexMap<(String, String), Acc> = IndexMap::new();

        for row in rows {
            let Some(r) = row.dining_rating else { continue };
            if row.locality.is_empty() {
                continue;
            }
            let acc = groups
                .entry((row.locality.clone(), row.city.clone()))
                .or_default();
            acc.count += 1;
            acc.rating.push(r);
            if acc.area_type.is_none() {
                acc.area_type = row.area_type.clone();
            }
        }

        let mut stats: Vec<LocalityStat> = groups
            .into_iter()
            .filter(|(_, acc)| acc.count >= self.config.min_locality_count)
            .map(|((locality, city), acc)| LocalityStat {
                locality,
                city,
                avg_rating: round2(acc.rating.mean()),
                restaurants: acc.count,
                area_type: acc.area_type.unwrap_or_else(|| "Unknown".to_string()),
            })
            .collect();

        stats.sort_by(|a, b| {
            b.avg_rating
                .total_cmp(&a.avg_rating)
                .then(b.restaurants.cmp(&a.restaurants))
        });
        stats.truncate(self.config.top_localities);
        stats
    }

    /// Value scatter: rows with both cost and rating snap to the nearest
    /// cost anchor; anchors with no samples are omitted.
    pub fn value_points(&self, rows: &[RestaurantRow]) -> Vec<ValuePoint> {
        #[derive(Default)]
        struct Acc {
            count: u32,
            rating: MeanAcc,
        }

        let mut anchors: IndexMap<u32, Acc> =
            COST_ANCHORS.iter().map(|a| (*a, Acc::default())).collect();

        for row in rows {
            let (Some(cost), Some(r)) = (row.pricing_for_2, row.dining_rating) else {
                continue;
            };
            let acc = anchors.entry(nearest_anchor(cost)).or_default();
            acc.count += 1;
            acc.rating.push(r);
        }

        anchors
            .into_iter()
            .filter(|(_, acc)| acc.count > 0)
            .map(|(cost, acc)| ValuePoint {
                cost,
                rating: round2(acc.rating.mean()),
                restaurants: acc.count,
                category: ValueCategory::for_cost(cost).label().to_string(),
            })
            .collect()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Running mean accumulator.
#[derive(Debug, Clone, Copy, Default)]
struct MeanAcc {
    sum: f64,
    n: u32,
}

impl MeanAcc {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.n += 1;
    }

    fn mean(&self) -> f64 {
        if self.n == 0 { 0.0 } else { self.sum / self.n as f64 }
    }
}

fn nearest_anchor(cost: u32) -> u32 {
    let mut best = COST_ANCHORS[0];
    for &anchor in COST_ANCHORS {
        if anchor.abs_diff(cost) < best.abs_diff(cost) {
            best = anchor;
        }
    }
    best
}

fn share(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        round1(count as f64 * 100.0 / total as f64)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        name: &str,
        cuisines: &[&str],
        locality: &str,
        city: &str,
        rating: Option<f64>,
        price: Option<u32>,
    ) -> RestaurantRow {
        RestaurantRow {
            name: name.to_string(),
            cuisines: cuisines.iter().map(|s| s.to_string()).collect(),
            locality: locality.to_string(),
            city: city.to_string(),
            area_type: None,
            dining_rating: rating,
            pricing_for_2: price,
            review_count: None,
        }
    }

    fn sample_rows() -> Vec<RestaurantRow> {
        vec![
            row("A", &["North Indian"], "Khan Market", "New Delhi", Some(4.6), Some(1200)),
            row("B", &["North Indian", "Mughlai"], "Khan Market", "New Delhi", Some(4.4), Some(900)),
            row("C", &["Chinese"], "Cyber Hub", "Gurgaon", Some(4.0), Some(700)),
            row("D", &["Fast Food"], "Sector 29", "Gurgaon", Some(3.6), Some(450)),
            row("E", &["North Indian"], "Cyber Hub", "Gurgaon", None, Some(850)),
        ]
    }

    #[test]
    fn test_cuisine_stats_ordering_and_share() {
        let aggregator = Aggregator::with_config(AggregateConfig {
            min_cuisine_count: 1,
            top_cuisines: 8,
            ..AggregateConfig::default()
        });
        let stats = aggregator.cuisine_stats(&sample_rows());

        assert_eq!(stats[0].name, "North Indian");
        assert_eq!(stats[0].restaurants, 3);
        // 3 of 5 rows
        assert_eq!(stats[0].market_share, 60.0);
        // mean of 4.6 and 4.4 (unrated row excluded)
        assert_eq!(stats[0].avg_rating, 4.5);
        // counts are non-increasing
        assert!(stats.windows(2).all(|w| w[0].restaurants >= w[1].restaurants));
    }

    #[test]
    fn test_cuisine_min_count_floor() {
        let aggregator = Aggregator::new();
        // Default floor of 5 filters everything in this tiny sample
        assert!(aggregator.cuisine_stats(&sample_rows()).is_empty());
    }

    #[test]
    fn test_city_stats() {
        let aggregator = Aggregator::new();
        let stats = aggregator.city_stats(&sample_rows());

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].name, "Gurgaon");
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[0].localities, 2);
        assert_eq!(stats[0].color, CITY_COLORS[0]);
        assert_eq!(stats[1].name, "New Delhi");
        assert_eq!(stats[1].avg_rating, 4.5);
    }

    #[test]
    fn test_rating_distribution_bands_in_order() {
        let aggregator = Aggregator::new();
        let buckets = aggregator.rating_distribution(&sample_rows());

        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].label, "Poor (< 2.0)");
        assert_eq!(buckets[5].label, "Outstanding (4.8+)");
        // 4 rated rows: 3.6 -> Average, 4.0 and 4.4 -> Good, 4.6 -> Excellent
        assert_eq!(buckets[2].count, 1);
        assert_eq!(buckets[3].count, 2);
        assert_eq!(buckets[4].count, 1);
        assert_eq!(buckets[3].percentage, 50.0);
        let sum: f64 = buckets.iter().map(|b| b.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.5);
    }

    #[test]
    fn test_price_segments() {
        let aggregator = Aggregator::new();
        let segments = aggregator.price_segments(&sample_rows());

        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].segment, "Budget (< ₹500)");
        assert_eq!(segments[0].count, 1);
        // 500-1000: rows at 900, 700, 850
        assert_eq!(segments[1].count, 3);
        assert_eq!(segments[2].count, 1);
        assert_eq!(segments[4].count, 0);
    }

    #[test]
    fn test_locality_stats_rating_order() {
        let aggregator = Aggregator::with_config(AggregateConfig {
            min_locality_count: 1,
            ..AggregateConfig::default()
        });
        let stats = aggregator.locality_stats(&sample_rows());

        assert_eq!(stats[0].locality, "Khan Market");
        assert_eq!(stats[0].restaurants, 2);
        assert_eq!(stats[0].avg_rating, 4.5);
        // Unrated row in Cyber Hub doesn't count
        let cyber_hub = stats.iter().find(|l| l.locality == "Cyber Hub").unwrap();
        assert_eq!(cyber_hub.restaurants, 1);
        assert!(stats.windows(2).all(|w| w[0].avg_rating >= w[1].avg_rating));
    }

    #[test]
    fn test_value_points_snap_to_anchors() {
        let aggregator = Aggregator::new();
        let points = aggregator.value_points(&sample_rows());

        // 1200 -> 1000, 900 -> 1000, 700 -> 750, 450 -> 500; unrated row dropped
        let costs: Vec<u32> = points.iter().map(|p| p.cost).collect();
        assert_eq!(costs, vec![500, 750, 1000]);
        let at_1000 = points.iter().find(|p| p.cost == 1000).unwrap();
        assert_eq!(at_1000.restaurants, 2);
        assert_eq!(at_1000.category, "Fair Value");
    }

    #[test]
    fn test_nearest_anchor() {
        assert_eq!(nearest_anchor(0), 300);
        assert_eq!(nearest_anchor(420), 500);
        assert_eq!(nearest_anchor(880), 1000);
        // Ties keep the lower anchor
        assert_eq!(nearest_anchor(400), 300);
        assert_eq!(nearest_anchor(860), 750);
        assert_eq!(nearest_anchor(10_000), 4500);
    }

    #[test]
    fn test_build_dataset_meta() {
        let aggregator = Aggregator::with_config(AggregateConfig {
            min_cuisine_count: 1,
            min_locality_count: 1,
            ..AggregateConfig::default()
        });
        let dataset = aggregator.build_dataset(&sample_rows(), "test", "unit fixture", None);

        assert_eq!(dataset.meta.records, 5);
        // mean of 4.6, 4.4, 4.0, 3.6
        assert_eq!(dataset.meta.average_rating, 4.15);
        assert_eq!(dataset.meta.label, "test");
        assert!(!dataset.is_empty());
    }
}
