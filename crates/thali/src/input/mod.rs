//! Ingestion of raw restaurant listings (CSV/TSV).

mod parser;
mod row;
mod source;

pub use parser::{IngestConfig, Ingestor};
pub use row::RestaurantRow;
pub use source::SourceMetadata;
