//! Itinerary endpoint handler.

use crate::api::{ApiError, AppState};
use crate::logging::generate_request_id;
use crate::plan::PlanError;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// POST /api/itinerary - Run the planning pipeline for one request.
///
/// The body is an arbitrary JSON payload; a missing or malformed body is
/// treated as an empty object and falls through to request validation.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<Value>>,
) -> Result<Response, ApiError> {
    let request_id = generate_request_id();
    let start = std::time::Instant::now();

    let planner = state.planner.as_ref().ok_or_else(|| {
        tracing::error!(%request_id, "generation credential is not configured");
        ApiError::from(PlanError::MissingCredential)
    })?;

    let payload = payload
        .map(|Json(value)| value)
        .unwrap_or_else(|| Value::Object(Default::default()));

    info!(%request_id, "itinerary request");

    let result = planner.plan(&payload).await.map_err(|e| {
        info!(
            %request_id,
            latency_ms = start.elapsed().as_millis() as u64,
            error = %e,
            "itinerary request failed"
        );
        ApiError::from(e)
    })?;

    info!(
        %request_id,
        latency_ms = start.elapsed().as_millis() as u64,
        days = result.itinerary.days.len(),
        pois = result.pois.len(),
        "itinerary request succeeded"
    );

    Ok(Json(result).into_response())
}
