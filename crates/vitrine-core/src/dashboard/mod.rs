//! Dashboard domain: metrics models and the fetch channel seam.

pub mod channel;
pub mod model;

pub use channel::MetricsChannel;
pub use model::{DashboardSnapshot, DateRange, MetricsSnapshot};
