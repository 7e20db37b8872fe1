//! Per-section handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use thali::{Section, export};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Get one dataset section by name.
pub async fn get_section(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let section: Section = name.parse().map_err(ApiError::NotFound)?;
    let value = export::section_value(&state.dataset, section)?;
    Ok(Json(value))
}
