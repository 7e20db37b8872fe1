//! Property-based tests for classifiers, formatters and aggregation.
//!
//! These tests use proptest to generate random inputs and verify that the
//! core stays total and deterministic:
//!
//! 1. **No panics**: classifiers and builders never crash on any input
//! 2. **Determinism**: same input always produces same output
//! 3. **Invariants**: breakpoints, ordering and bounds always hold

use proptest::prelude::*;

use thali::{
    AggregateConfig, Aggregator, PriceTier, RatingBand, RatingClass, RestaurantRow, format,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Ratings on the declared 0.0-5.0 scale.
fn rating() -> impl Strategy<Value = f64> {
    0.0f64..=5.0
}

/// Costs for two in a realistic rupee range.
fn cost() -> impl Strategy<Value = u32> {
    50u32..10_000
}

/// A small set of plausible restaurant rows.
fn rows() -> impl Strategy<Value = Vec<RestaurantRow>> {
    let cuisine = prop_oneof![
        Just("North Indian"),
        Just("Chinese"),
        Just("South Indian"),
        Just("Cafe"),
        Just("Fast Food"),
    ];
    let locality = prop_oneof![
        Just(("Khan Market", "New Delhi")),
        Just(("Cyber Hub", "Gurgaon")),
        Just(("Sector 18", "Noida")),
    ];

    prop::collection::vec(
        (cuisine, locality, proptest::option::of(rating()), proptest::option::of(cost())),
        1..60,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (cuisine, (locality, city), rating, cost))| RestaurantRow {
                name: format!("R{}", i),
                cuisines: vec![cuisine.to_string()],
                locality: locality.to_string(),
                city: city.to_string(),
                area_type: None,
                dining_rating: rating,
                pricing_for_2: cost,
                review_count: None,
            })
            .collect()
    })
}

// =============================================================================
// Classifier Properties
// =============================================================================

proptest! {
    #[test]
    fn rating_class_matches_breakpoints(r in rating()) {
        let class = RatingClass::for_rating(r);
        if r >= 4.2 {
            prop_assert_eq!(class, RatingClass::Excellent);
        } else if r >= 4.0 {
            prop_assert_eq!(class, RatingClass::Good);
        } else {
            prop_assert_eq!(class, RatingClass::Average);
        }
    }

    #[test]
    fn rating_class_is_deterministic(r in rating()) {
        prop_assert_eq!(RatingClass::for_rating(r), RatingClass::for_rating(r));
    }

    #[test]
    fn rating_band_is_monotonic(a in rating(), b in rating()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RatingBand::for_rating(lo) <= RatingBand::for_rating(hi));
    }

    #[test]
    fn rating_band_label_is_canonical(r in rating()) {
        let band = RatingBand::for_rating(r);
        prop_assert!(RatingBand::ALL.contains(&band));
        prop_assert!(RatingBand::ALL.iter().any(|b| b.label() == band.label()));
    }

    #[test]
    fn price_tier_is_monotonic(a in cost(), b in cost()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(PriceTier::for_cost(lo) <= PriceTier::for_cost(hi));
    }
}

// =============================================================================
// Formatter Properties
// =============================================================================

proptest! {
    #[test]
    fn group_thousands_preserves_digits(n in any::<u64>()) {
        let grouped = format::group_thousands(n);
        let stripped: String = grouped.chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(stripped, n.to_string());
    }

    #[test]
    fn group_thousands_chunks_are_well_formed(n in any::<u64>()) {
        let grouped = format::group_thousands(n);
        let chunks: Vec<&str> = grouped.split(',').collect();
        // First chunk 1-3 digits, the rest exactly 3
        prop_assert!((1..=3).contains(&chunks[0].len()));
        prop_assert!(chunks[1..].iter().all(|c| c.len() == 3));
    }

    #[test]
    fn percentage_always_has_one_decimal(v in 0.0f64..=100.0) {
        let text = format::percentage(v);
        prop_assert!(text.ends_with('%'));
        let number = &text[..text.len() - 1];
        let (_, decimals) = number.split_once('.').expect("decimal point");
        prop_assert_eq!(decimals.len(), 1);
    }
}

// =============================================================================
// Aggregation Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn aggregation_never_panics_and_is_deterministic(rows in rows()) {
        let aggregator = Aggregator::with_config(AggregateConfig {
            min_cuisine_count: 1,
            min_locality_count: 1,
            ..AggregateConfig::default()
        });

        let first = aggregator.build_dataset(&rows, "prop", "generated", None);
        let second = aggregator.build_dataset(&rows, "prop", "generated", None);

        prop_assert_eq!(first.cuisines, second.cuisines);
        prop_assert_eq!(first.rating_distribution, second.rating_distribution);
        prop_assert_eq!(first.value_points, second.value_points);
    }

    #[test]
    fn bucket_percentages_sum_to_100(rows in rows()) {
        let aggregator = Aggregator::new();
        let buckets = aggregator.rating_distribution(&rows);

        let rated = rows.iter().filter(|r| r.dining_rating.is_some()).count();
        if rated > 0 {
            let sum: f64 = buckets.iter().map(|b| b.percentage).sum();
            // Each of <= 6 buckets rounds to one decimal
            prop_assert!((sum - 100.0).abs() <= 0.6, "sum was {}", sum);
        } else {
            prop_assert!(buckets.iter().all(|b| b.count == 0));
        }
    }

    #[test]
    fn market_shares_stay_in_bounds(rows in rows()) {
        let aggregator = Aggregator::with_config(AggregateConfig {
            min_cuisine_count: 1,
            ..AggregateConfig::default()
        });
        let stats = aggregator.cuisine_stats(&rows);

        // Single-cuisine rows: shares partition the total
        let sum: f64 = stats.iter().map(|c| c.market_share).sum();
        prop_assert!(sum <= 100.0 + 0.1 * stats.len() as f64);
        prop_assert!(stats.iter().all(|c| (0.0..=100.0).contains(&c.market_share)));
    }

    #[test]
    fn cuisine_counts_are_sorted(rows in rows()) {
        let aggregator = Aggregator::with_config(AggregateConfig {
            min_cuisine_count: 1,
            ..AggregateConfig::default()
        });
        let stats = aggregator.cuisine_stats(&rows);
        prop_assert!(stats.windows(2).all(|w| w[0].restaurants >= w[1].restaurants));
    }
}
