//! Application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use thali::Dataset;

/// Shared application state.
///
/// The snapshot is immutable for the server's lifetime; handlers only read.
#[derive(Clone)]
pub struct AppState {
    /// The snapshot being served.
    pub dataset: Arc<Dataset>,
    /// Path the snapshot was loaded from (None = built-in).
    pub snapshot_path: Option<PathBuf>,
}

impl AppState {
    /// Create new application state.
    pub fn new(dataset: Dataset, snapshot_path: Option<PathBuf>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            snapshot_path,
        }
    }
}
