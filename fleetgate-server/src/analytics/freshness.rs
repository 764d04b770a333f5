//! Staleness classification for the precomputed summary.

use chrono::{DateTime, Duration, Utc};

use crate::db::models::DailySummary;

/// Snapshot age relative to the staleness threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
}

impl Freshness {
    /// A snapshot is fresh while `age <= threshold`. A snapshot timestamped
    /// in the future (negative age) counts as fresh.
    pub fn classify(age: Duration, threshold: Duration) -> Self {
        if age <= threshold {
            Freshness::Fresh
        } else {
            Freshness::Stale
        }
    }
}

/// What the analytics read path does after fetching the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    /// Snapshot is fresh; serve it as-is.
    Serve,
    /// Snapshot is stale; serve it and regenerate in the background.
    ServeAndRefresh,
    /// No snapshot exists yet; generate one before answering.
    GenerateFirst,
}

impl RefreshDecision {
    pub fn for_snapshot(
        snapshot: Option<&DailySummary>,
        now: DateTime<Utc>,
        threshold: Duration,
    ) -> Self {
        match snapshot {
            None => RefreshDecision::GenerateFirst,
            Some(row) => {
                let age = now.signed_duration_since(row.snapshot_time);
                match Freshness::classify(age, threshold) {
                    Freshness::Fresh => RefreshDecision::Serve,
                    Freshness::Stale => RefreshDecision::ServeAndRefresh,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> Duration {
        Duration::seconds(300)
    }

    fn snapshot_aged(secs: i64) -> (DailySummary, DateTime<Utc>) {
        let now = Utc::now();
        let summary = DailySummary {
            delivered: 42,
            avg_speed: 61.5,
            revenue: 1_250_000,
            snapshot_time: now - Duration::seconds(secs),
        };
        (summary, now)
    }

    #[test]
    fn age_past_threshold_is_stale() {
        let (summary, now) = snapshot_aged(301);
        assert_eq!(
            RefreshDecision::for_snapshot(Some(&summary), now, threshold()),
            RefreshDecision::ServeAndRefresh
        );
    }

    #[test]
    fn young_snapshot_is_served_without_refresh() {
        let (summary, now) = snapshot_aged(100);
        assert_eq!(
            RefreshDecision::for_snapshot(Some(&summary), now, threshold()),
            RefreshDecision::Serve
        );
    }

    #[test]
    fn age_exactly_at_threshold_is_still_fresh() {
        let (summary, now) = snapshot_aged(300);
        assert_eq!(
            RefreshDecision::for_snapshot(Some(&summary), now, threshold()),
            RefreshDecision::Serve
        );
    }

    #[test]
    fn future_snapshot_is_fresh() {
        let (summary, now) = snapshot_aged(-30);
        assert_eq!(
            RefreshDecision::for_snapshot(Some(&summary), now, threshold()),
            RefreshDecision::Serve
        );
    }

    #[test]
    fn missing_snapshot_forces_first_time_generation() {
        assert_eq!(
            RefreshDecision::for_snapshot(None, Utc::now(), threshold()),
            RefreshDecision::GenerateFirst
        );
    }
}
