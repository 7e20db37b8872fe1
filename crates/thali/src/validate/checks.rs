//! Checks run against a dataset snapshot.

use crate::classify::{PriceTier, RatingBand, ValueCategory};
use crate::model::{Dataset, Section};

use super::observation::{CheckKind, Observation, Severity};

/// Tolerance for bucketed percentage sums.
const SUM_TOLERANCE: f64 = 0.5;

/// Declared rating scale.
const RATING_MIN: f64 = 0.0;
const RATING_MAX: f64 = 5.0;

/// Trait for snapshot checks.
pub trait Check {
    /// Run the check and return observations.
    fn run(&self, dataset: &Dataset) -> Vec<Observation>;
}

/// Bucketed percentage arrays must sum to ~100; top-N share arrays must stay
/// within bounds.
pub struct PercentageSumCheck;

impl Check for PercentageSumCheck {
    fn run(&self, dataset: &Dataset) -> Vec<Observation> {
        let mut observations = Vec::new();

        let bucketed: [(&str, Vec<f64>); 2] = [
            (
                Section::Ratings.name(),
                dataset.rating_distribution.iter().map(|b| b.percentage).collect(),
            ),
            (
                Section::Prices.name(),
                dataset.price_segments.iter().map(|s| s.percentage).collect(),
            ),
        ];

        for (section, percentages) in bucketed {
            if percentages.is_empty() {
                continue;
            }
            let sum: f64 = percentages.iter().sum();
            if (sum - 100.0).abs() > SUM_TOLERANCE {
                observations.push(
                    Observation::new(
                        CheckKind::PercentageSum,
                        Severity::Warning,
                        section,
                        format!("bucket percentages sum to {:.1}, expected ~100", sum),
                    )
                    .with_expected(100.0)
                    .with_actual(sum),
                );
            }
        }

        // Cuisine shares are a top-N cut: bounded per entry, capped in total
        let mut share_sum = 0.0;
        for cuisine in &dataset.cuisines {
            if !(0.0..=100.0).contains(&cuisine.market_share) {
                observations.push(
                    Observation::new(
                        CheckKind::PercentageSum,
                        Severity::Error,
                        Section::Cuisines.name(),
                        format!(
                            "market share for '{}' is outside 0-100",
                            cuisine.name
                        ),
                    )
                    .with_actual(cuisine.market_share),
                );
            }
            share_sum += cuisine.market_share;
        }
        if share_sum > 100.0 + SUM_TOLERANCE {
            observations.push(
                Observation::new(
                    CheckKind::PercentageSum,
                    Severity::Warning,
                    Section::Cuisines.name(),
                    format!("market shares sum to {:.1}, expected at most ~100", share_sum),
                )
                .with_expected(100.0)
                .with_actual(share_sum),
            );
        }

        observations
    }
}

/// Every rating field must be finite and on the declared 0-5 scale.
pub struct RatingRangeCheck;

impl RatingRangeCheck {
    fn check_value(
        observations: &mut Vec<Observation>,
        section: &str,
        subject: &str,
        value: f64,
    ) {
        if !value.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&value) {
            observations.push(
                Observation::new(
                    CheckKind::RatingRange,
                    Severity::Error,
                    section,
                    format!(
                        "rating for {} is outside [{}, {}]",
                        subject, RATING_MIN, RATING_MAX
                    ),
                )
                .with_actual(value),
            );
        }
    }
}

impl Check for RatingRangeCheck {
    fn run(&self, dataset: &Dataset) -> Vec<Observation> {
        let mut observations = Vec::new();

        Self::check_value(
            &mut observations,
            "meta",
            "the snapshot headline",
            dataset.meta.average_rating,
        );
        for c in &dataset.cuisines {
            Self::check_value(&mut observations, Section::Cuisines.name(), &c.name, c.avg_rating);
        }
        for c in &dataset.cities {
            Self::check_value(&mut observations, Section::Cities.name(), &c.name, c.avg_rating);
        }
        for s in &dataset.price_segments {
            Self::check_value(&mut observations, Section::Prices.name(), &s.segment, s.avg_rating);
        }
        for l in &dataset.localities {
            Self::check_value(&mut observations, Section::Localities.name(), &l.locality, l.avg_rating);
        }
        for p in &dataset.value_points {
            Self::check_value(
                &mut observations,
                Section::ValuePoints.name(),
                &format!("the ₹{} point", p.cost),
                p.rating,
            );
        }

        observations
    }
}

/// Bucket counts should account for every declared record.
pub struct CountConsistencyCheck;

impl Check for CountConsistencyCheck {
    fn run(&self, dataset: &Dataset) -> Vec<Observation> {
        let mut observations = Vec::new();
        let declared = dataset.meta.records as u64;

        let bucketed: [(&str, u64); 2] = [
            (
                Section::Ratings.name(),
                dataset.rating_distribution.iter().map(|b| b.count as u64).sum(),
            ),
            (
                Section::Prices.name(),
                dataset.price_segments.iter().map(|s| s.count as u64).sum(),
            ),
        ];

        for (section, sum) in bucketed {
            if sum == 0 {
                continue;
            }
            // Unrated/unpriced rows legitimately shrink the sum; more than
            // declared is always wrong, less only warrants a note.
            if sum > declared {
                observations.push(
                    Observation::new(
                        CheckKind::CountConsistency,
                        Severity::Warning,
                        section,
                        format!(
                            "bucket counts sum to {} but the snapshot declares {} records",
                            sum, declared
                        ),
                    )
                    .with_expected(declared as f64)
                    .with_actual(sum as f64),
                );
            }
        }

        observations
    }
}

/// Bucket, segment and value-point labels must match their classifiers.
pub struct LabelConsistencyCheck;

impl Check for LabelConsistencyCheck {
    fn run(&self, dataset: &Dataset) -> Vec<Observation> {
        let mut observations = Vec::new();

        for (i, bucket) in dataset.rating_distribution.iter().enumerate() {
            match RatingBand::ALL.get(i) {
                Some(band) if bucket.label == band.label() => {}
                Some(band) => observations.push(Observation::new(
                    CheckKind::LabelConsistency,
                    Severity::Warning,
                    Section::Ratings.name(),
                    format!(
                        "bucket {} is labeled '{}', expected '{}'",
                        i,
                        bucket.label,
                        band.label()
                    ),
                )),
                None => observations.push(Observation::new(
                    CheckKind::LabelConsistency,
                    Severity::Warning,
                    Section::Ratings.name(),
                    format!("unexpected extra bucket '{}'", bucket.label),
                )),
            }
        }

        for (i, segment) in dataset.price_segments.iter().enumerate() {
            match PriceTier::ALL.get(i) {
                Some(tier) if segment.segment == tier.label() => {}
                Some(tier) => observations.push(Observation::new(
                    CheckKind::LabelConsistency,
                    Severity::Warning,
                    Section::Prices.name(),
                    format!(
                        "segment {} is labeled '{}', expected '{}'",
                        i,
                        segment.segment,
                        tier.label()
                    ),
                )),
                None => observations.push(Observation::new(
                    CheckKind::LabelConsistency,
                    Severity::Warning,
                    Section::Prices.name(),
                    format!("unexpected extra segment '{}'", segment.segment),
                )),
            }
        }

        for point in &dataset.value_points {
            let expected = ValueCategory::for_cost(point.cost).label();
            if point.category != expected {
                observations.push(Observation::new(
                    CheckKind::LabelConsistency,
                    Severity::Warning,
                    Section::ValuePoints.name(),
                    format!(
                        "₹{} point is labeled '{}', expected '{}'",
                        point.cost, point.category, expected
                    ),
                ));
            }
        }

        observations
    }
}

/// Sections should not be empty; a fully empty snapshot is an error.
pub struct EmptySectionCheck;

impl Check for EmptySectionCheck {
    fn run(&self, dataset: &Dataset) -> Vec<Observation> {
        let mut observations = Vec::new();

        if dataset.is_empty() {
            observations.push(Observation::new(
                CheckKind::EmptySection,
                Severity::Error,
                "meta",
                "snapshot has no data in any section",
            ));
            return observations;
        }

        let sections: [(Section, bool); 6] = [
            (Section::Cuisines, dataset.cuisines.is_empty()),
            (Section::Cities, dataset.cities.is_empty()),
            (Section::Ratings, dataset.rating_distribution.is_empty()),
            (Section::Prices, dataset.price_segments.is_empty()),
            (Section::Localities, dataset.localities.is_empty()),
            (Section::ValuePoints, dataset.value_points.is_empty()),
        ];

        for (section, empty) in sections {
            if empty {
                observations.push(Observation::new(
                    CheckKind::EmptySection,
                    Severity::Warning,
                    section.name(),
                    format!("section '{}' has no records", section.name()),
                ));
            }
        }

        observations
    }
}

/// Runs all checks against a snapshot.
pub struct ValidationEngine {
    checks: Vec<Box<dyn Check>>,
}

impl ValidationEngine {
    /// Create an engine with the standard check set.
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(PercentageSumCheck),
                Box::new(RatingRangeCheck),
                Box::new(CountConsistencyCheck),
                Box::new(LabelConsistencyCheck),
                Box::new(EmptySectionCheck),
            ],
        }
    }

    /// Run every check and collect observations.
    pub fn validate(&self, dataset: &Dataset) -> Vec<Observation> {
        self.checks
            .iter()
            .flat_map(|check| check.run(dataset))
            .collect()
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_snapshot_is_clean() {
        let engine = ValidationEngine::new();
        let observations = engine.validate(Dataset::builtin());
        assert!(
            observations.is_empty(),
            "unexpected observations: {:?}",
            observations
        );
    }

    #[test]
    fn test_percentage_sum_detects_drift() {
        let mut dataset = Dataset::builtin().clone();
        dataset.rating_distribution[0].percentage += 5.0;

        let observations = PercentageSumCheck.run(&dataset);
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].check, CheckKind::PercentageSum);
        assert_eq!(observations[0].severity, Severity::Warning);
        assert_eq!(observations[0].section, "ratings");
    }

    #[test]
    fn test_rating_range_detects_off_scale() {
        let mut dataset = Dataset::builtin().clone();
        dataset.cuisines[0].avg_rating = 5.5;
        dataset.localities[0].avg_rating = f64::NAN;

        let observations = RatingRangeCheck.run(&dataset);
        assert_eq!(observations.len(), 2);
        assert!(observations.iter().all(|o| o.severity == Severity::Error));
    }

    #[test]
    fn test_count_consistency_flags_overflow() {
        let mut dataset = Dataset::builtin().clone();
        dataset.meta.records = 100;

        let observations = CountConsistencyCheck.run(&dataset);
        assert_eq!(observations.len(), 2);
    }

    #[test]
    fn test_label_consistency_detects_mislabel() {
        let mut dataset = Dataset::builtin().clone();
        dataset.price_segments[0].segment = "Cheap".to_string();
        dataset.value_points[0].category = "Steal".to_string();

        let observations = LabelConsistencyCheck.run(&dataset);
        assert_eq!(observations.len(), 2);
    }

    #[test]
    fn test_empty_section_warns() {
        let mut dataset = Dataset::builtin().clone();
        dataset.localities.clear();

        let observations = EmptySectionCheck.run(&dataset);
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].section, "localities");
        assert_eq!(observations[0].severity, Severity::Warning);
    }
}
