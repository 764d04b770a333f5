//! Analytics endpoint - the stale-read-triggered refresh path.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::analytics::RefreshDecision;
use crate::db::models::DailySummary;
use crate::db::repos::SummaryRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /analytics/daily-stats
///
/// Serves the current snapshot. A stale snapshot is returned as-is and
/// regenerated behind the response, so only the next read observes fresh
/// data. With no snapshot at all, first-time generation blocks the request
/// and the freshly computed row is returned.
async fn daily_stats(State(state): State<AppState>) -> Result<Json<DailySummary>, ApiError> {
    let repo = SummaryRepo::new(state.executor());
    let snapshot = repo.current().await?;

    let decision = RefreshDecision::for_snapshot(
        snapshot.as_ref(),
        Utc::now(),
        state.refresher().threshold(),
    );
    match decision {
        RefreshDecision::Serve => {}
        RefreshDecision::ServeAndRefresh => {
            state.refresher().spawn_refresh();
        }
        RefreshDecision::GenerateFirst => {
            state.refresher().regenerate_now().await?;
            let fresh = repo.current().await?.ok_or(ApiError::MissingSummary)?;
            return Ok(Json(fresh));
        }
    }

    // Serve and ServeAndRefresh both imply a snapshot was fetched
    snapshot.map(Json).ok_or(ApiError::MissingSummary)
}

/// Analytics routes
pub fn router() -> Router<AppState> {
    Router::new().route("/analytics/daily-stats", get(daily_stats))
}
