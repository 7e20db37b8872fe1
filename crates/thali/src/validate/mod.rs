//! Data-quality checks for dashboard snapshots.

mod checks;
mod observation;

pub use checks::{
    Check, CountConsistencyCheck, EmptySectionCheck, LabelConsistencyCheck, PercentageSumCheck,
    RatingRangeCheck, ValidationEngine,
};
pub use observation::{CheckKind, Observation, Severity};
