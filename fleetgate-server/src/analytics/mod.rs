//! Stale-read-triggered refresh for the precomputed daily summary.
//!
//! Reads always return the pre-refresh snapshot; regeneration runs behind
//! the response and only subsequent reads observe the new data. The one
//! exception is a cold start with no snapshot at all, where first-time
//! generation blocks the request.

pub mod freshness;
pub mod refresher;

pub use freshness::{Freshness, RefreshDecision};
pub use refresher::{RefreshOutcome, SummaryRefresher};
