//! CLI command implementations.

pub mod analyze;
pub mod check;
pub mod export;
pub mod serve;
pub mod show;

use std::path::PathBuf;

use thali::Dataset;

/// Load the snapshot named on the command line, or fall back to the
/// built-in dataset.
pub(crate) fn load_snapshot(
    file: &Option<PathBuf>,
) -> Result<Dataset, Box<dyn std::error::Error>> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(format!("Snapshot not found: {}", path.display()).into());
            }
            Ok(Dataset::load(path)?)
        }
        None => Ok(Dataset::builtin().clone()),
    }
}
