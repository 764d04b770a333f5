//! Telemetry endpoints

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::db::models::TelemetryPoint;
use crate::db::repos::TelemetryRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /telemetry/truck/{plate}
///
/// Most recent history for an exact license plate, newest first.
async fn truck_history(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<Vec<TelemetryPoint>>, ApiError> {
    let rows = TelemetryRepo::new(state.executor())
        .truck_history(&plate)
        .await?;
    Ok(Json(rows))
}

/// Telemetry routes
pub fn router() -> Router<AppState> {
    Router::new().route("/telemetry/truck/{plate}", get(truck_history))
}
