//! Metrics channel trait.

use async_trait::async_trait;

use crate::dashboard::model::{DateRange, MetricsSnapshot};
use crate::error::FetchError;

/// Channel to the dashboard metrics service.
///
/// Implementations fetch an aggregated snapshot for one date range. They
/// are not required to support cancellation; the aggregator discards
/// superseded responses instead.
#[async_trait]
pub trait MetricsChannel: Send + Sync {
    /// Fetches the metrics aggregated over the given range.
    async fn fetch_metrics(&self, range: DateRange) -> Result<MetricsSnapshot, FetchError>;
}
