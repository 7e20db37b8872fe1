//! Snapshot and summary handlers.

use axum::{Json, extract::State};
use thali::{Dataset, KeyMetrics};

use crate::server::state::AppState;

/// Get the full snapshot, exactly as the wire contract serializes it.
pub async fn get_dataset(State(state): State<AppState>) -> Json<Dataset> {
    Json(state.dataset.as_ref().clone())
}

/// Get the headline metrics for the dashboard cards.
pub async fn get_summary(State(state): State<AppState>) -> Json<KeyMetrics> {
    Json(state.dataset.key_metrics())
}
