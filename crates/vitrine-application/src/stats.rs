//! Dashboard metrics aggregation.
//!
//! `StatsAggregator` owns the dashboard snapshot and coordinates refreshes
//! against the metrics channel. The user can switch the date range while a
//! fetch is still in flight, so every request carries a sequence number and
//! only the most recently issued one may apply its result; superseded
//! responses are discarded even when the transport cannot be cancelled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use vitrine_core::dashboard::channel::MetricsChannel;
use vitrine_core::dashboard::model::{DashboardSnapshot, DateRange};
use vitrine_core::error::FetchError;

/// Fetches and owns the dashboard metrics for the selected date range.
pub struct StatsAggregator {
    state: Arc<RwLock<DashboardSnapshot>>,
    channel: Arc<dyn MetricsChannel>,
    /// Sequence number of the most recently issued refresh
    sequence: AtomicU64,
}

impl StatsAggregator {
    pub fn new(channel: Arc<dyn MetricsChannel>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DashboardSnapshot::default())),
            channel,
            sequence: AtomicU64::new(0),
        }
    }

    /// Returns a snapshot of the dashboard state.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().await.clone()
    }

    /// Fetches metrics for the given range and applies them unless a newer
    /// refresh was issued in the meantime.
    ///
    /// On failure of the most recent refresh the previous metrics are
    /// retained and the typed error is returned as a non-fatal notice.
    /// A superseded refresh resolves to `Ok(())` without touching state;
    /// its outcome belongs to a request the user has already abandoned.
    pub async fn refresh(&self, range: DateRange) -> Result<(), FetchError> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.date_range = range;
        }
        tracing::debug!(seq, %range, "metrics refresh issued");

        let result = self.channel.fetch_metrics(range).await;

        let mut state = self.state.write().await;
        if self.sequence.load(Ordering::SeqCst) != seq {
            tracing::debug!(seq, "superseded metrics response dropped");
            return Ok(());
        }

        match result {
            Ok(snapshot) => {
                state.metrics = snapshot.metrics;
                state.last_refreshed_at = Some(snapshot.as_of);
                state.loading = false;
                tracing::debug!(seq, "metrics applied");
                Ok(())
            }
            Err(err) => {
                // Stale metrics stay on screen; only the spinner clears.
                state.loading = false;
                tracing::warn!(seq, %err, "metrics refresh failed, keeping stale values");
                Err(err)
            }
        }
    }
}
