//! Persisted credential store trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::model::StoredCredential;

/// Storage for the single persisted credential.
///
/// The store holds at most one credential under a fixed key. It is written
/// only by the session store (on login success and logout) and read only
/// during session restore; no other component may touch the persisted value
/// directly.
///
/// # Security Note
///
/// Implementations should ensure the backing file has appropriate
/// permissions (e.g., 600 on Unix) and never log token contents.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the persisted credential, if any.
    ///
    /// Returns `Ok(None)` when no credential has been stored; that is the
    /// normal signed-out state, not an error.
    async fn load(&self) -> Result<Option<StoredCredential>>;

    /// Persists the credential, replacing any prior value.
    async fn save(&self, credential: &StoredCredential) -> Result<()>;

    /// Removes the persisted credential.
    ///
    /// Clearing an already-empty store is not an error.
    async fn clear(&self) -> Result<()>;
}
