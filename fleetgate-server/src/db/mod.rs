//! Database access - per-call connections and the fixed read queries.

pub mod executor;
pub mod models;
pub mod repos;

pub use executor::{QueryExecutor, StoreError};
