//! Liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Liveness response
#[derive(Serialize)]
pub struct LivenessResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// GET /
async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "fleetgate online",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(liveness))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn liveness_reports_version() {
        let Json(body) = liveness().await;
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.message, "fleetgate online");
    }
}
