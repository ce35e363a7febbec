//! Service wiring.
//!
//! Builds the application services from configuration with the production
//! adapters: file-backed credential store and HTTP channels.

use std::sync::Arc;

use vitrine_core::config::ConfigRoot;
use vitrine_core::error::Result;
use vitrine_infrastructure::{
    ConfigService, FileCredentialStore, HttpAuthChannel, HttpMetricsChannel,
};

use crate::session_store::SessionStore;
use crate::stats::StatsAggregator;

/// The wired application services.
pub struct AppServices {
    pub config: ConfigRoot,
    pub session: Arc<SessionStore>,
    pub stats: Arc<StatsAggregator>,
}

/// Wires the services against the given configuration.
pub fn bootstrap(config: ConfigRoot) -> Result<AppServices> {
    let credentials = Arc::new(FileCredentialStore::at_default_location()?);
    let auth = Arc::new(HttpAuthChannel::from_config(&config.endpoints)?);
    let metrics = Arc::new(HttpMetricsChannel::from_config(&config.endpoints)?);

    Ok(AppServices {
        session: Arc::new(SessionStore::new(credentials, auth)),
        stats: Arc::new(StatsAggregator::new(metrics)),
        config,
    })
}

/// Wires the services from `~/.config/vitrine/vitrine.toml` (or defaults
/// when the file is absent).
pub fn bootstrap_default() -> Result<AppServices> {
    bootstrap(ConfigService::load(None)?)
}
