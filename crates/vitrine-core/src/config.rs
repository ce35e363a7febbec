//! Static application configuration.
//!
//! Every section and field carries a serde default, so an absent file, an
//! absent section, or a partially filled one all yield a working
//! configuration.

use serde::{Deserialize, Serialize};

use crate::access::guard::CapabilityMap;
use crate::checkout::step::RouteTable;
use crate::error::Result;
use crate::session::model::Role;

/// Root of `vitrine.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigRoot {
    #[serde(default)]
    pub routes: RouteTable,
    #[serde(default)]
    pub access: AccessConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl ConfigRoot {
    /// Parses a configuration document, filling defaults for anything absent.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Access-control configuration: redirect destinations and the static
/// capability map consulted by the guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Authentication entry point denied navigations are sent to
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Fallback destination for authenticated-but-unauthorized navigations
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
    /// Protected-view identifier to permitted roles
    #[serde(default = "default_capabilities")]
    pub capabilities: CapabilityMap,
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_fallback_path() -> String {
    "/".to_string()
}

fn default_capabilities() -> CapabilityMap {
    let mut capabilities = CapabilityMap::new();
    capabilities.insert("admin.dashboard".to_string(), vec![Role::Admin]);
    capabilities.insert("admin.orders".to_string(), vec![Role::Admin, Role::Staff]);
    capabilities.insert("admin.products".to_string(), vec![Role::Admin, Role::Staff]);
    capabilities.insert("admin.services".to_string(), vec![Role::Admin, Role::Staff]);
    capabilities.insert("admin.news".to_string(), vec![Role::Admin, Role::Staff]);
    capabilities
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            fallback_path: default_fallback_path(),
            capabilities: default_capabilities(),
        }
    }
}

/// Service endpoints used by the HTTP adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_metrics_url")]
    pub metrics_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_auth_url() -> String {
    "https://api.vitrine.example/auth/login".to_string()
}

fn default_metrics_url() -> String {
    "https://api.vitrine.example/admin/metrics".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            metrics_url: default_metrics_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
