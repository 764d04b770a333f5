//! Background regeneration of the precomputed summary.
//!
//! The read that triggers a refresh never waits on it; the outcome is
//! published on a watch channel and logged, not returned to the caller.
//! Concurrent triggers while a regeneration is in flight are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::watch;

use crate::db::repos::SummaryRepo;
use crate::db::{QueryExecutor, StoreError};

/// Result of one completed regeneration attempt.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub finished_at: DateTime<Utc>,
    pub error: Option<String>,
}

/// Drops concurrent triggers while a regeneration is in flight.
#[derive(Debug, Default)]
pub struct SingleFlight {
    running: AtomicBool,
}

impl SingleFlight {
    /// Claim the flight. Returns false when one is already running.
    pub fn try_begin(&self) -> bool {
        !self.running.swap(true, Ordering::AcqRel)
    }

    pub fn finish(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn in_flight(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Owns the staleness threshold and the fire-and-forget refresh task for
/// the daily summary.
pub struct SummaryRefresher {
    executor: QueryExecutor,
    threshold: Duration,
    gate: Arc<SingleFlight>,
    outcome_tx: Arc<watch::Sender<Option<RefreshOutcome>>>,
}

impl SummaryRefresher {
    pub fn new(executor: QueryExecutor, threshold_secs: u64) -> Self {
        let (outcome_tx, _) = watch::channel(None);
        Self {
            executor,
            threshold: Duration::seconds(threshold_secs as i64),
            gate: Arc::new(SingleFlight::default()),
            outcome_tx: Arc::new(outcome_tx),
        }
    }

    /// Maximum acceptable snapshot age before a read triggers regeneration.
    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Watch completed refresh outcomes. Starts as `None`.
    pub fn outcomes(&self) -> watch::Receiver<Option<RefreshOutcome>> {
        self.outcome_tx.subscribe()
    }

    /// Regenerate the summary inside the calling request. Cold-start path
    /// only; its failure is a read-path failure.
    pub async fn regenerate_now(&self) -> Result<(), StoreError> {
        SummaryRepo::new(&self.executor).regenerate().await
    }

    /// Kick off a background regeneration. Returns false when a refresh is
    /// already in flight and the trigger was dropped.
    pub fn spawn_refresh(&self) -> bool {
        if !self.gate.try_begin() {
            tracing::debug!("summary refresh already in flight, trigger dropped");
            return false;
        }

        let executor = self.executor.clone();
        let gate = Arc::clone(&self.gate);
        let outcome_tx = Arc::clone(&self.outcome_tx);
        tokio::spawn(async move {
            let error = match SummaryRepo::new(&executor).regenerate().await {
                Ok(()) => None,
                Err(error) => {
                    tracing::warn!(%error, "summary refresh failed");
                    Some(error.to_string())
                }
            };
            // Release the gate before publishing so a subscriber that sees
            // the outcome can immediately trigger the next refresh.
            gate.finish();
            let _ = outcome_tx.send(Some(RefreshOutcome {
                finished_at: Utc::now(),
                error,
            }));
        });
        true
    }
}
