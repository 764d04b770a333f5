//! Fixed read queries, repository-style.
//!
//! Every statement is a fixed template with positional binds, including the
//! result caps, which ride along as bound LIMIT parameters.

use fleetgate_core::MonthWindow;

use super::executor::{QueryExecutor, StoreError};
use super::models::{DailySummary, Invoice, Shipment, TelemetryPoint};

/// Row cap for ad-hoc lookups.
const LOOKUP_ROW_CAP: i64 = 1000;

/// Row cap for the telemetry history lookup.
const TELEMETRY_ROW_CAP: i64 = 100;

/// Minimum amount, in cents, for an invoice to count as high-value.
const HIGH_VALUE_THRESHOLD_CENTS: i64 = 50_000;

/// Shipment lookups
pub struct ShipmentRepo<'a> {
    exec: &'a QueryExecutor,
}

impl<'a> ShipmentRepo<'a> {
    pub fn new(exec: &'a QueryExecutor) -> Self {
        Self { exec }
    }

    /// Shipments created inside the given month window.
    pub async fn in_month(&self, window: MonthWindow) -> Result<Vec<Shipment>, StoreError> {
        let query = sqlx::query_as::<_, Shipment>(
            r#"
            SELECT id, driver_id, origin, destination, status, created_at
            FROM shipments
            WHERE created_at >= $1
              AND created_at < $2
            LIMIT $3
            "#,
        )
        .bind(window.start())
        .bind(window.end())
        .bind(LOOKUP_ROW_CAP);
        self.exec.fetch_all(query).await
    }

    /// Shipments whose driver name contains the given substring,
    /// case-insensitively.
    pub async fn by_driver(&self, name: &str) -> Result<Vec<Shipment>, StoreError> {
        let pattern = format!("%{name}%");
        let query = sqlx::query_as::<_, Shipment>(
            r#"
            SELECT s.id, s.driver_id, s.origin, s.destination, s.status, s.created_at
            FROM shipments s
            JOIN drivers d ON s.driver_id = d.driver_id
            WHERE d.driver_name ILIKE $1
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(LOOKUP_ROW_CAP);
        self.exec.fetch_all(query).await
    }
}

/// Finance lookups
pub struct InvoiceRepo<'a> {
    exec: &'a QueryExecutor,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(exec: &'a QueryExecutor) -> Self {
        Self { exec }
    }

    /// Invoices whose semi-structured amount exceeds the high-value
    /// threshold.
    pub async fn high_value(&self) -> Result<Vec<Invoice>, StoreError> {
        let query = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, invoice_data, created_at
            FROM finance_invoices
            WHERE (invoice_data->>'amount_cents')::INTEGER > $1
            LIMIT $2
            "#,
        )
        .bind(HIGH_VALUE_THRESHOLD_CENTS)
        .bind(LOOKUP_ROW_CAP);
        self.exec.fetch_all(query).await
    }
}

/// Telemetry lookups
pub struct TelemetryRepo<'a> {
    exec: &'a QueryExecutor,
}

impl<'a> TelemetryRepo<'a> {
    pub fn new(exec: &'a QueryExecutor) -> Self {
        Self { exec }
    }

    /// Most recent samples for a license plate (exact match), newest first.
    pub async fn truck_history(&self, plate: &str) -> Result<Vec<TelemetryPoint>, StoreError> {
        let query = sqlx::query_as::<_, TelemetryPoint>(
            r#"
            SELECT id, truck_license_plate, speed, fuel_level, timestamp
            FROM truck_telemetry
            WHERE truck_license_plate = $1
            ORDER BY timestamp DESC
            LIMIT $2
            "#,
        )
        .bind(plate.to_owned())
        .bind(TELEMETRY_ROW_CAP);
        self.exec.fetch_all(query).await
    }
}

/// Daily summary reads and regeneration
pub struct SummaryRepo<'a> {
    exec: &'a QueryExecutor,
}

impl<'a> SummaryRepo<'a> {
    pub fn new(exec: &'a QueryExecutor) -> Self {
        Self { exec }
    }

    /// Current snapshot, if one has ever been materialized.
    pub async fn current(&self) -> Result<Option<DailySummary>, StoreError> {
        let query = sqlx::query_as::<_, DailySummary>(
            r#"
            SELECT
                delivered_count AS delivered,
                avg_speed,
                total_revenue_cents AS revenue,
                snapshot_time
            FROM analytics_dashboard
            LIMIT 1
            "#,
        );
        self.exec.fetch_optional(query).await
    }

    /// Recompute every aggregate from source data, replacing the snapshot
    /// wholesale.
    pub async fn regenerate(&self) -> Result<(), StoreError> {
        self.exec
            .execute(sqlx::query("REFRESH MATERIALIZED VIEW analytics_dashboard"))
            .await?;
        Ok(())
    }
}
