//! Observation types for snapshot quality issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which check produced an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Bucketed percentages don't sum to ~100.
    PercentageSum,
    /// A rating field is non-finite or off the 0-5 scale.
    RatingRange,
    /// Bucket counts disagree with the declared record total.
    CountConsistency,
    /// A label doesn't match its canonical classifier label.
    LabelConsistency,
    /// A section has no records.
    EmptySection,
}

impl CheckKind {
    /// Get a human-readable label for the check kind.
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::PercentageSum => "Percentage Sum",
            CheckKind::RatingRange => "Rating Range",
            CheckKind::CountConsistency => "Count Consistency",
            CheckKind::LabelConsistency => "Label Consistency",
            CheckKind::EmptySection => "Empty Section",
        }
    }
}

/// Severity level of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only, may not require action.
    Info,
    /// Potential issue that should be reviewed.
    Warning,
    /// Definite issue that should be addressed.
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// A data-quality finding about one snapshot section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Unique identifier for this observation.
    pub id: String,
    /// Which check fired.
    pub check: CheckKind,
    /// Severity level.
    pub severity: Severity,
    /// Affected section name (or "meta").
    pub section: String,
    /// Human-readable description.
    pub description: String,
    /// Expected value, when numeric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<f64>,
    /// Actual value, when numeric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    /// When detected.
    pub detected_at: DateTime<Utc>,
}

impl Observation {
    /// Create a new observation.
    pub fn new(
        check: CheckKind,
        severity: Severity,
        section: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_observation_id(),
            check,
            severity,
            section: section.into(),
            description: description.into(),
            expected: None,
            actual: None,
            detected_at: Utc::now(),
        }
    }

    /// Set the expected value.
    pub fn with_expected(mut self, expected: f64) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Set the actual value.
    pub fn with_actual(mut self, actual: f64) -> Self {
        self.actual = Some(actual);
        self
    }
}

/// Generate a unique observation ID.
fn generate_observation_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    format!("obs_{:03}", COUNTER.fetch_add(1, Ordering::SeqCst))
}
