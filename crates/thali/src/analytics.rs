//! Main Analytics engine and public API.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateConfig, Aggregator};
use crate::error::Result;
use crate::input::{IngestConfig, Ingestor, SourceMetadata};
use crate::model::{Dataset, Section};
use crate::validate::{Observation, Severity, ValidationEngine};

/// Configuration for a full analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    /// Ingestion configuration.
    pub ingest: IngestConfig,
    /// Aggregation configuration.
    pub aggregate: AggregateConfig,
    /// Label recorded in the snapshot meta (defaults to the file stem).
    pub label: Option<String>,
}

/// Result of analyzing a raw listings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Provenance of the source file.
    pub source: SourceMetadata,
    /// The aggregated snapshot.
    pub dataset: Dataset,
    /// Data-quality observations about the snapshot.
    pub observations: Vec<Observation>,
    /// Summary statistics.
    pub summary: AnalysisSummary,
}

/// Summary of a quality pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Total number of sections.
    pub total_sections: usize,
    /// Number of sections with at least one observation.
    pub sections_with_issues: usize,
    /// Total number of observations.
    pub total_observations: usize,
    /// Observations by severity.
    pub observations_by_severity: ObservationCounts,
    /// Data quality score (0.0-1.0).
    pub data_quality_score: f64,
    /// Human-readable recommendation.
    pub recommendation: String,
}

/// Counts of observations by severity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservationCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

/// The main analytics engine: ingest, aggregate, validate.
pub struct Analytics {
    config: AnalyticsConfig,
    ingestor: Ingestor,
    aggregator: Aggregator,
    validation: ValidationEngine,
}

impl Analytics {
    /// Create a new engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyticsConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: AnalyticsConfig) -> Self {
        let ingestor = Ingestor::with_config(config.ingest.clone());
        let aggregator = Aggregator::with_config(config.aggregate.clone());
        let validation = ValidationEngine::new();

        Self {
            config,
            ingestor,
            aggregator,
            validation,
        }
    }

    /// Ingest a raw listings file, build the snapshot and run quality checks.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<DashboardReport> {
        let path = path.as_ref();

        let (rows, source) = self.ingestor.ingest_file(path)?;

        let label = self.config.label.clone().unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "snapshot".to_string())
        });

        let dataset = self.aggregator.build_dataset(
            &rows,
            label,
            source.file.clone(),
            Some(source.hash.clone()),
        );

        let observations = self.validation.validate(&dataset);
        let summary = compute_summary(&observations);

        Ok(DashboardReport {
            source,
            dataset,
            observations,
            summary,
        })
    }

    /// Run quality checks against an existing snapshot.
    pub fn check(&self, dataset: &Dataset) -> (Vec<Observation>, AnalysisSummary) {
        let observations = self.validation.validate(dataset);
        let summary = compute_summary(&observations);
        (observations, summary)
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute summary statistics from a set of observations.
fn compute_summary(observations: &[Observation]) -> AnalysisSummary {
    let total_sections = Section::ALL.len();

    let sections_with_issues = {
        let mut affected: HashSet<&str> = HashSet::new();
        for obs in observations {
            affected.insert(&obs.section);
        }
        affected.len()
    };

    let mut observations_by_severity = ObservationCounts::default();
    for obs in observations {
        match obs.severity {
            Severity::Error => observations_by_severity.error += 1,
            Severity::Warning => observations_by_severity.warning += 1,
            Severity::Info => observations_by_severity.info += 1,
        }
    }

    let data_quality_score = calculate_quality_score(
        total_sections,
        sections_with_issues,
        &observations_by_severity,
    );

    let recommendation = generate_recommendation(&observations_by_severity, data_quality_score);

    AnalysisSummary {
        total_sections,
        sections_with_issues,
        total_observations: observations.len(),
        observations_by_severity,
        data_quality_score,
        recommendation,
    }
}

/// Calculate a data quality score.
fn calculate_quality_score(
    total_sections: usize,
    sections_with_issues: usize,
    severity_counts: &ObservationCounts,
) -> f64 {
    if total_sections == 0 {
        return 1.0;
    }

    // Base score from the share of clean sections
    let section_score = 1.0 - (sections_with_issues.min(total_sections) as f64 / total_sections as f64);

    // Penalty for severity
    let error_penalty = severity_counts.error as f64 * 0.1;
    let warning_penalty = severity_counts.warning as f64 * 0.02;
    let info_penalty = severity_counts.info as f64 * 0.005;

    let total_penalty = (error_penalty + warning_penalty + info_penalty).min(0.5);

    (section_score - total_penalty).clamp(0.0, 1.0)
}

/// Generate a recommendation based on the quality pass.
fn generate_recommendation(severity_counts: &ObservationCounts, quality_score: f64) -> String {
    if severity_counts.error > 0 {
        format!(
            "Address {} error-level issues before publishing this snapshot.",
            severity_counts.error
        )
    } else if severity_counts.warning > 3 {
        format!(
            "Review {} warning-level issues to improve snapshot quality (score: {:.0}%).",
            severity_counts.warning,
            quality_score * 100.0
        )
    } else if quality_score >= 0.9 {
        "Snapshot quality is good. Minor issues detected for review.".to_string()
    } else if quality_score >= 0.7 {
        "Snapshot quality is acceptable. Consider addressing warnings.".to_string()
    } else {
        "Snapshot quality needs attention. Review all observations.".to_string()
    }
}
