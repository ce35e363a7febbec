//! Vitrine infrastructure adapters.
//!
//! Concrete implementations of the collaborator traits defined in
//! `vitrine-core`: file-backed credential storage, HTTP auth/metrics
//! channels, in-memory doubles, and configuration loading.

pub mod config_service;
pub mod file_credential_store;
pub mod http;
pub mod memory;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_credential_store::FileCredentialStore;
pub use crate::http::{HttpAuthChannel, HttpMetricsChannel};
pub use crate::memory::{
    FixedMetricsChannel, InMemoryCredentialStore, StaticAccount, StaticAuthChannel,
};
