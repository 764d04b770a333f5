//! Row types returned by the fixed queries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Shipment record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Shipment {
    pub id: i64,
    pub driver_id: i64,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Invoice record with its semi-structured payload.
///
/// `invoice_data` is JSONB in the store; the high-value filter casts its
/// `amount_cents` field to integer inside the statement.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Invoice {
    pub id: i64,
    pub invoice_data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// One telemetry sample for a truck
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TelemetryPoint {
    pub id: i64,
    pub truck_license_plate: String,
    pub speed: f64,
    pub fuel_level: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Precomputed daily summary.
///
/// Exactly one logical row exists at a time; regeneration replaces it,
/// never appends. `snapshot_time` drives the staleness check.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailySummary {
    pub delivered: i64,
    pub avg_speed: f64,
    pub revenue: i64,
    pub snapshot_time: DateTime<Utc>,
}
