//! Finance endpoints

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::models::Invoice;
use crate::db::repos::InvoiceRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /finance/high-value-invoices
///
/// Fixed-threshold filter over the semi-structured invoice payload.
async fn high_value(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, ApiError> {
    let rows = InvoiceRepo::new(state.executor()).high_value().await?;
    Ok(Json(rows))
}

/// Finance routes
pub fn router() -> Router<AppState> {
    Router::new().route("/finance/high-value-invoices", get(high_value))
}
