//! Dataset snapshot model: record types and the snapshot container.

mod dataset;
mod records;

pub use dataset::{Dataset, KeyMetrics, Section, SnapshotMeta};
pub use records::{CityStat, CuisineStat, LocalityStat, PriceSegment, RatingBucket, ValuePoint};
