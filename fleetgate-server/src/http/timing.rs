//! Request timing middleware.
//!
//! Stamps every response with `X-Process-Time` (wall-clock seconds,
//! fractional, as text). Cross-cutting only: status, body, and errors pass
//! through untouched.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

pub const PROCESS_TIME_HEADER: &str = "x-process-time";

pub async fn process_time(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let mut response = next.run(request).await;
    let elapsed = started.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&elapsed.to_string()) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    fn test_router() -> Router {
        Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route(
                "/fail",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .layer(middleware::from_fn(process_time))
    }

    async fn process_time_of(path: &str) -> (StatusCode, f64) {
        let response = test_router()
            .oneshot(
                HttpRequest::builder()
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let header = response
            .headers()
            .get(PROCESS_TIME_HEADER)
            .expect("X-Process-Time missing")
            .to_str()
            .unwrap()
            .parse::<f64>()
            .expect("X-Process-Time is not numeric");
        (status, header)
    }

    #[tokio::test]
    async fn success_responses_carry_a_non_negative_duration() {
        let (status, elapsed) = process_time_of("/ok").await;
        assert_eq!(status, StatusCode::OK);
        assert!(elapsed >= 0.0);
    }

    #[tokio::test]
    async fn failure_responses_carry_the_header_too() {
        let (status, elapsed) = process_time_of("/fail").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(elapsed >= 0.0);
    }
}
