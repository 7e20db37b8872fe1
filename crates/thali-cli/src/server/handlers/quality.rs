//! Data-quality report handler.

use axum::{Json, extract::State};
use serde::Serialize;
use thali::{AnalysisSummary, Analytics, Observation};

use crate::server::state::AppState;

/// Response for the quality endpoint.
#[derive(Serialize)]
pub struct QualityResponse {
    /// Observations from the check pass.
    pub observations: Vec<Observation>,
    /// Aggregated summary and score.
    pub summary: AnalysisSummary,
}

/// Run the check pass over the served snapshot.
pub async fn get_quality(State(state): State<AppState>) -> Json<QualityResponse> {
    let analytics = Analytics::new();
    let (observations, summary) = analytics.check(&state.dataset);
    Json(QualityResponse {
        observations,
        summary,
    })
}
