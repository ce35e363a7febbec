//! HTTP implementation of the metrics channel.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use vitrine_core::config::EndpointConfig;
use vitrine_core::dashboard::channel::MetricsChannel;
use vitrine_core::dashboard::model::{DateRange, MetricsSnapshot};
use vitrine_core::error::{FetchError, Result, VitrineError};

/// Metrics channel that GETs an aggregated snapshot per date range.
#[derive(Clone)]
pub struct HttpMetricsChannel {
    client: Client,
    metrics_url: String,
}

#[derive(Deserialize)]
struct MetricsResponse {
    metrics: HashMap<String, f64>,
    as_of: DateTime<Utc>,
}

impl HttpMetricsChannel {
    pub fn new(metrics_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VitrineError::internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            metrics_url: metrics_url.into(),
        })
    }

    pub fn from_config(endpoints: &EndpointConfig) -> Result<Self> {
        Self::new(
            endpoints.metrics_url.clone(),
            Duration::from_secs(endpoints.request_timeout_secs),
        )
    }
}

#[async_trait]
impl MetricsChannel for HttpMetricsChannel {
    async fn fetch_metrics(
        &self,
        range: DateRange,
    ) -> std::result::Result<MetricsSnapshot, FetchError> {
        let response = self
            .client
            .get(&self.metrics_url)
            .query(&[("range", range.to_string())])
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    FetchError::Timeout
                } else {
                    tracing::warn!("metrics request failed: {}", err);
                    FetchError::NetworkFailure
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "metrics service answered with an error status");
            return Err(FetchError::ServerError);
        }

        let body: MetricsResponse = response.json().await.map_err(|err| {
            tracing::warn!("malformed metrics response: {}", err);
            FetchError::ServerError
        })?;

        Ok(MetricsSnapshot {
            metrics: body.metrics,
            as_of: body.as_of,
        })
    }
}
