//! HTTP surface tests that run without a database.
//!
//! The store is pointed at an unreachable address, so read paths that touch
//! it must answer with the generic failure response while still carrying
//! the timing header.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use fleetgate_core::FleetConfig;
use fleetgate_server::{build_router, AppState};
use tower::ServiceExt;

fn app_with_unreachable_store() -> Router {
    let mut config = FleetConfig::default();
    config.store.database_url = "postgres://127.0.0.1:1/unreachable".to_string();
    build_router(AppState::new(&config))
}

async fn get(path: &str) -> axum::response::Response {
    app_with_unreachable_store()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn process_time(response: &axum::response::Response) -> f64 {
    response
        .headers()
        .get("x-process-time")
        .expect("X-Process-Time missing")
        .to_str()
        .unwrap()
        .parse()
        .expect("X-Process-Time is not numeric")
}

#[tokio::test]
async fn liveness_succeeds_without_a_store() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(process_time(&response) >= 0.0);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "fleetgate online");
}

#[tokio::test]
async fn malformed_month_is_rejected_before_touching_the_store() {
    let response = get("/shipments/by-date?date=not-a-month").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(process_time(&response) >= 0.0);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "invalid_month");
}

#[tokio::test]
async fn unreachable_store_surfaces_as_generic_failure() {
    for path in [
        "/shipments/by-date?date=2024-03",
        "/shipments/driver/smith",
        "/finance/high-value-invoices",
        "/telemetry/truck/KA-01-HH-1234",
        "/analytics/daily-stats",
    ] {
        let response = get(path).await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "unexpected status for {path}"
        );
        assert!(process_time(&response) >= 0.0, "missing timing for {path}");
    }
}

#[tokio::test]
async fn unknown_route_is_404_with_timing() {
    let response = get("/no/such/route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(process_time(&response) >= 0.0);
}
