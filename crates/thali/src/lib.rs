//! Thali: restaurant analytics engine for dining-market dashboards.
//!
//! Thali turns raw restaurant listings into immutable dashboard snapshots:
//! typed arrays of cuisine, city, rating, price, locality and value
//! statistics that every rendering surface (terminal, JSON API, web UI)
//! consumes through one wire contract. Snapshots can also be loaded
//! directly from JSON, or taken from the embedded default.
//!
//! # Core Principles
//!
//! - **Data is injected**: rendering never owns constants; one aggregation
//!   path produces every snapshot.
//! - **Classification is fixed**: rating, price and value breakpoints are
//!   pure functions, tested at their boundaries.
//! - **Snapshots are checked**: percentage sums, rating ranges, counts and
//!   labels are validated, never assumed.
//!
//! # Example
//!
//! ```no_run
//! use thali::Analytics;
//!
//! let analytics = Analytics::new();
//! let report = analytics.analyze("restaurants.csv").unwrap();
//!
//! println!("Cuisines: {}", report.dataset.cuisines.len());
//! println!("Quality: {:.0}%", report.summary.data_quality_score * 100.0);
//! ```

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod model;
pub mod validate;

mod analytics;

pub use crate::analytics::{
    AnalysisSummary, Analytics, AnalyticsConfig, DashboardReport, ObservationCounts,
};
pub use aggregate::{AggregateConfig, Aggregator};
pub use classify::{BadgeVariant, PriceTier, RatingBand, RatingClass, ValueCategory};
pub use error::{Result, ThaliError};
pub use export::ExportFormat;
pub use input::{IngestConfig, Ingestor, RestaurantRow, SourceMetadata};
pub use model::{
    CityStat, CuisineStat, Dataset, KeyMetrics, LocalityStat, PriceSegment, RatingBucket, Section,
    SnapshotMeta, ValuePoint,
};
pub use validate::{CheckKind, Observation, Severity, ValidationEngine};
