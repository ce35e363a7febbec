//! In-memory adapters.
//!
//! Implementations of the collaborator traits that hold everything in
//! process memory. Used by tests and by offline/demo runs where no backend
//! is available.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;
use vitrine_core::dashboard::channel::MetricsChannel;
use vitrine_core::dashboard::model::{DateRange, MetricsSnapshot};
use vitrine_core::error::{AuthError, FetchError, Result};
use vitrine_core::session::auth_channel::AuthChannel;
use vitrine_core::session::credential_store::CredentialStore;
use vitrine_core::session::model::{AuthGrant, AuthToken, Credentials, StoredCredential, UserProfile};

/// Credential store holding at most one credential in memory.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    slot: Mutex<Option<StoredCredential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the store pre-populated, as after a previous login.
    pub fn with_credential(credential: StoredCredential) -> Self {
        Self {
            slot: Mutex::new(Some(credential)),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Result<Option<StoredCredential>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, credential: &StoredCredential) -> Result<()> {
        *self.slot.lock().await = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.slot.lock().await = None;
        Ok(())
    }
}

/// One account known to the [`StaticAuthChannel`].
#[derive(Debug, Clone)]
pub struct StaticAccount {
    pub email: String,
    pub password: String,
    pub profile: UserProfile,
}

/// Auth channel backed by a fixed account list.
///
/// Successful logins mint a fresh opaque token per call.
#[derive(Default)]
pub struct StaticAuthChannel {
    accounts: Vec<StaticAccount>,
}

impl StaticAuthChannel {
    pub fn new(accounts: Vec<StaticAccount>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AuthChannel for StaticAuthChannel {
    async fn authenticate(&self, credentials: &Credentials) -> std::result::Result<AuthGrant, AuthError> {
        self.accounts
            .iter()
            .find(|account| {
                account.email == credentials.email && account.password == credentials.password
            })
            .map(|account| AuthGrant {
                token: AuthToken::new(Uuid::new_v4().to_string()),
                user: account.profile.clone(),
            })
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// Metrics channel answering from canned snapshots.
#[derive(Default)]
pub struct FixedMetricsChannel {
    snapshots: HashMap<DateRange, HashMap<String, f64>>,
}

impl FixedMetricsChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, range: DateRange, metrics: HashMap<String, f64>) {
        self.snapshots.insert(range, metrics);
    }

    pub fn with_snapshot(mut self, range: DateRange, metrics: HashMap<String, f64>) -> Self {
        self.insert(range, metrics);
        self
    }
}

#[async_trait]
impl MetricsChannel for FixedMetricsChannel {
    async fn fetch_metrics(
        &self,
        range: DateRange,
    ) -> std::result::Result<MetricsSnapshot, FetchError> {
        self.snapshots
            .get(&range)
            .map(|metrics| MetricsSnapshot {
                metrics: metrics.clone(),
                as_of: Utc::now(),
            })
            .ok_or(FetchError::ServerError)
    }
}
