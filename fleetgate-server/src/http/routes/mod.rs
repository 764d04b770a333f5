//! Route modules, one per resource area.

pub mod analytics;
pub mod finance;
pub mod root;
pub mod shipments;
pub mod telemetry;
