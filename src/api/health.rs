//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub pois: usize,
    pub generation_configured: bool,
}

/// GET /health - Return service status.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let generation_configured = state.planner.is_some();
    let status = if generation_configured {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        pois: state.catalog.len(),
        generation_configured,
    })
}
