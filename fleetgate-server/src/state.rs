//! Application state shared across handlers

use std::sync::Arc;

use fleetgate_core::FleetConfig;

use crate::analytics::SummaryRefresher;
use crate::db::QueryExecutor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    executor: QueryExecutor,
    refresher: SummaryRefresher,
}

impl AppState {
    pub fn new(config: &FleetConfig) -> Self {
        let executor = QueryExecutor::new(config.store.clone());
        let refresher = SummaryRefresher::new(
            executor.clone(),
            config.analytics.staleness_threshold_secs,
        );
        Self {
            inner: Arc::new(AppStateInner {
                executor,
                refresher,
            }),
        }
    }

    pub fn executor(&self) -> &QueryExecutor {
        &self.inner.executor
    }

    pub fn refresher(&self) -> &SummaryRefresher {
        &self.inner.refresher
    }
}
