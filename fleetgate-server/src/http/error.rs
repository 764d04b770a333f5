//! API error types with IntoResponse.
//!
//! Read-path store failures surface to the caller as 5xx responses;
//! background refresh failures never reach this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use fleetgate_core::CoreError;

use crate::db::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Month parameter failed to parse (400)
    InvalidMonth { value: String, reason: String },

    /// Store unreachable or statement failed (500, logged)
    Store(StoreError),

    /// Summary view produced no row even after regeneration (404)
    MissingSummary,

    /// Internal error (500)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidMonth { value, reason } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_month",
                    "message": format!("invalid month '{}': {}", value, reason)
                }),
            ),
            Self::Store(e) => {
                // Log the actual error, return a generic message
                tracing::error!("store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "store_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
            Self::MissingSummary => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": "no daily summary has been materialized"
                }),
            ),
            Self::Internal { message } => {
                tracing::error!("internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidMonth { value, reason } => Self::InvalidMonth { value, reason },
            CoreError::Config { reason } => Self::Internal { message: reason },
        }
    }
}
