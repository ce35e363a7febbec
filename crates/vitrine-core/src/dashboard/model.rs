//! Dashboard domain models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date range the dashboard metrics are aggregated over.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum DateRange {
    #[default]
    #[serde(rename = "today")]
    #[strum(serialize = "today")]
    Today,
    #[serde(rename = "last-7-days")]
    #[strum(serialize = "last-7-days")]
    Last7Days,
    #[serde(rename = "last-30-days")]
    #[strum(serialize = "last-30-days")]
    Last30Days,
    #[serde(rename = "last-90-days")]
    #[strum(serialize = "last-90-days")]
    Last90Days,
}

/// One successful response of the metrics channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Metric name to value (revenue, order count, ...)
    pub metrics: HashMap<String, f64>,
    /// Server-side aggregation timestamp
    pub as_of: DateTime<Utc>,
}

/// Dashboard state as observed by the admin surface.
///
/// Mutated only by the stats aggregator. On a failed refresh the previous
/// metrics are retained (stale-on-error) while `loading` clears.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub date_range: DateRange,
    pub metrics: HashMap<String, f64>,
    pub last_refreshed_at: Option<DateTime<Utc>>,
    pub loading: bool,
}
