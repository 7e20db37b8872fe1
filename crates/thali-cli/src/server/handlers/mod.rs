//! API request handlers.

mod dataset;
mod quality;
mod sections;

pub use dataset::*;
pub use quality::*;
pub use sections::*;
