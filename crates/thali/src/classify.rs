//! Fixed-breakpoint classifiers for ratings, prices and value.
//!
//! All classifiers are pure, deterministic functions over well-formed
//! numeric input. Behavior for non-finite or out-of-scale values is
//! unspecified; callers validate before classifying (see
//! [`validate`](crate::validate)).

use serde::{Deserialize, Serialize};

/// Three-level ordinal quality class shown as a table badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingClass {
    Excellent,
    Good,
    Average,
}

impl RatingClass {
    /// Classify a mean rating: >= 4.2 Excellent, >= 4.0 Good, else Average.
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 4.2 {
            RatingClass::Excellent
        } else if rating >= 4.0 {
            RatingClass::Good
        } else {
            RatingClass::Average
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            RatingClass::Excellent => "Excellent",
            RatingClass::Good => "Good",
            RatingClass::Average => "Average",
        }
    }

    /// Badge visual variant paired with the label, consistent by construction.
    pub fn badge(&self) -> BadgeVariant {
        match self {
            RatingClass::Excellent => BadgeVariant::Default,
            RatingClass::Good => BadgeVariant::Secondary,
            RatingClass::Average => BadgeVariant::Destructive,
        }
    }
}

/// Visual variant for a rating badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
        }
    }
}

/// Histogram bucket for the rating distribution.
///
/// Boundaries: 2.0, 3.0, 4.0, 4.5, 4.8 (left-inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Poor,
    BelowAverage,
    Average,
    Good,
    Excellent,
    Outstanding,
}

impl RatingBand {
    /// Canonical bucket order, lowest ratings first.
    pub const ALL: [RatingBand; 6] = [
        RatingBand::Poor,
        RatingBand::BelowAverage,
        RatingBand::Average,
        RatingBand::Good,
        RatingBand::Excellent,
        RatingBand::Outstanding,
    ];

    pub fn for_rating(rating: f64) -> Self {
        if rating < 2.0 {
            RatingBand::Poor
        } else if rating < 3.0 {
            RatingBand::BelowAverage
        } else if rating < 4.0 {
            RatingBand::Average
        } else if rating < 4.5 {
            RatingBand::Good
        } else if rating < 4.8 {
            RatingBand::Excellent
        } else {
            RatingBand::Outstanding
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Poor => "Poor (< 2.0)",
            RatingBand::BelowAverage => "Below Avg (2.0-2.9)",
            RatingBand::Average => "Average (3.0-3.9)",
            RatingBand::Good => "Good (4.0-4.4)",
            RatingBand::Excellent => "Excellent (4.5-4.7)",
            RatingBand::Outstanding => "Outstanding (4.8+)",
        }
    }
}

/// Pricing tier by cost for two.
///
/// Boundaries: 500, 1000, 2000, 3000 rupees (left-inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Budget,
    MidRange,
    Premium,
    Luxury,
    UltraLuxury,
}

impl PriceTier {
    /// Canonical tier order, cheapest first.
    pub const ALL: [PriceTier; 5] = [
        PriceTier::Budget,
        PriceTier::MidRange,
        PriceTier::Premium,
        PriceTier::Luxury,
        PriceTier::UltraLuxury,
    ];

    pub fn for_cost(cost: u32) -> Self {
        if cost < 500 {
            PriceTier::Budget
        } else if cost < 1000 {
            PriceTier::MidRange
        } else if cost < 2000 {
            PriceTier::Premium
        } else if cost < 3000 {
            PriceTier::Luxury
        } else {
            PriceTier::UltraLuxury
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Budget => "Budget (< ₹500)",
            PriceTier::MidRange => "Mid-Range (₹500-1000)",
            PriceTier::Premium => "Premium (₹1000-2000)",
            PriceTier::Luxury => "Luxury (₹2000-3000)",
            PriceTier::UltraLuxury => "Ultra-Luxury (> ₹3000)",
        }
    }
}

/// Qualitative value label for a (cost, rating) sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    ExcellentValue,
    GoodValue,
    FairValue,
    PremiumPricing,
}

impl ValueCategory {
    pub fn for_cost(cost: u32) -> Self {
        if cost < 500 {
            ValueCategory::ExcellentValue
        } else if cost < 1000 {
            ValueCategory::GoodValue
        } else if cost < 2000 {
            ValueCategory::FairValue
        } else {
            ValueCategory::PremiumPricing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValueCategory::ExcellentValue => "Excellent Value",
            ValueCategory::GoodValue => "Good Value",
            ValueCategory::FairValue => "Fair Value",
            ValueCategory::PremiumPricing => "Premium Pricing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_class_thresholds() {
        assert_eq!(RatingClass::for_rating(4.4), RatingClass::Excellent);
        assert_eq!(RatingClass::for_rating(4.1), RatingClass::Good);
        assert_eq!(RatingClass::for_rating(3.9), RatingClass::Average);
    }

    #[test]
    fn test_rating_class_boundaries() {
        assert_eq!(RatingClass::for_rating(4.2), RatingClass::Excellent);
        assert_eq!(RatingClass::for_rating(4.199999), RatingClass::Good);
        assert_eq!(RatingClass::for_rating(4.0), RatingClass::Good);
        assert_eq!(RatingClass::for_rating(3.999999), RatingClass::Average);
    }

    #[test]
    fn test_badge_pairs_with_label() {
        // The Italian / Mughlai rows from the cuisine table.
        let good = RatingClass::for_rating(4.1);
        assert_eq!(good.label(), "Good");
        assert_eq!(good.badge().as_str(), "secondary");

        let excellent = RatingClass::for_rating(4.4);
        assert_eq!(excellent.label(), "Excellent");
        assert_eq!(excellent.badge().as_str(), "default");

        assert_eq!(RatingClass::Average.badge(), BadgeVariant::Destructive);
    }

    #[test]
    fn test_rating_band_boundaries() {
        assert_eq!(RatingBand::for_rating(1.9), RatingBand::Poor);
        assert_eq!(RatingBand::for_rating(2.0), RatingBand::BelowAverage);
        assert_eq!(RatingBand::for_rating(3.0), RatingBand::Average);
        assert_eq!(RatingBand::for_rating(4.0), RatingBand::Good);
        assert_eq!(RatingBand::for_rating(4.5), RatingBand::Excellent);
        assert_eq!(RatingBand::for_rating(4.8), RatingBand::Outstanding);
        assert_eq!(RatingBand::for_rating(5.0), RatingBand::Outstanding);
    }

    #[test]
    fn test_price_tier_boundaries() {
        assert_eq!(PriceTier::for_cost(499), PriceTier::Budget);
        assert_eq!(PriceTier::for_cost(500), PriceTier::MidRange);
        assert_eq!(PriceTier::for_cost(1000), PriceTier::Premium);
        assert_eq!(PriceTier::for_cost(2000), PriceTier::Luxury);
        assert_eq!(PriceTier::for_cost(3000), PriceTier::UltraLuxury);
    }

    #[test]
    fn test_value_category_anchors() {
        // Anchor -> label pairs from the value scatter.
        assert_eq!(ValueCategory::for_cost(300).label(), "Excellent Value");
        assert_eq!(ValueCategory::for_cost(500).label(), "Good Value");
        assert_eq!(ValueCategory::for_cost(750).label(), "Good Value");
        assert_eq!(ValueCategory::for_cost(1000).label(), "Fair Value");
        assert_eq!(ValueCategory::for_cost(1500).label(), "Fair Value");
        assert_eq!(ValueCategory::for_cost(2000).label(), "Premium Pricing");
        assert_eq!(ValueCategory::for_cost(4500).label(), "Premium Pricing");
    }
}
