//! Shipment endpoints

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use fleetgate_core::MonthWindow;

use crate::db::models::Shipment;
use crate::db::repos::ShipmentRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// Query parameters for the date-range lookup
#[derive(Debug, Deserialize)]
pub struct ByDateParams {
    /// Month selector, `YYYY-MM`
    pub date: String,
}

/// GET /shipments/by-date?date=YYYY-MM
///
/// Range query over the month window starting at `date-01`.
async fn by_date(
    State(state): State<AppState>,
    Query(params): Query<ByDateParams>,
) -> Result<Json<Vec<Shipment>>, ApiError> {
    let window = MonthWindow::parse(&params.date)?;
    let rows = ShipmentRepo::new(state.executor()).in_month(window).await?;
    Ok(Json(rows))
}

/// GET /shipments/driver/{name}
///
/// Case-insensitive substring match on the driver name.
async fn by_driver(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Shipment>>, ApiError> {
    let rows = ShipmentRepo::new(state.executor()).by_driver(&name).await?;
    Ok(Json(rows))
}

/// Shipment routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shipments/by-date", get(by_date))
        .route("/shipments/driver/{name}", get(by_driver))
}
