//! HTTP adapters for the auth and metrics channels.

pub mod auth_channel;
pub mod metrics_channel;

pub use auth_channel::HttpAuthChannel;
pub use metrics_channel::HttpMetricsChannel;
