//! Session store: owns authentication state for the process.
//!
//! `SessionStore` is the only writer of the in-memory [`Session`] and of
//! the persisted credential. Every other component observes authentication
//! through [`SessionStore::session`] snapshots; none may read the persisted
//! credential directly.

use std::sync::Arc;

use tokio::sync::RwLock;
use vitrine_core::access::guard::RedirectTarget;
use vitrine_core::error::AuthError;
use vitrine_core::session::auth_channel::AuthChannel;
use vitrine_core::session::credential_store::CredentialStore;
use vitrine_core::session::model::{Credentials, Session, StoredCredential};

/// Owns the process-wide session and its lifecycle.
pub struct SessionStore {
    /// The session; created unauthenticated at startup
    session: Arc<RwLock<Session>>,
    /// Persistent credential storage, written only here
    credentials: Arc<dyn CredentialStore>,
    /// Channel to the authentication service
    auth: Arc<dyn AuthChannel>,
}

impl SessionStore {
    pub fn new(credentials: Arc<dyn CredentialStore>, auth: Arc<dyn AuthChannel>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            credentials,
            auth,
        }
    }

    /// Returns a snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Signs in with the given credentials.
    ///
    /// Expected failures (rejected credentials, unreachable service,
    /// credential that could not be persisted) come back as typed
    /// `AuthError` values and leave the session untouched. On success the
    /// credential is persisted before the in-memory session is populated,
    /// so a session that reports authenticated always has a stored
    /// counterpart.
    ///
    /// Concurrent calls are not queued; the last call to resolve determines
    /// the final session state.
    pub async fn login(&self, credentials: Credentials) -> Result<(), AuthError> {
        let grant = self.auth.authenticate(&credentials).await.inspect_err(|err| {
            tracing::debug!(%err, "login rejected");
        })?;

        let stored = StoredCredential::new(&grant);
        if let Err(err) = self.credentials.save(&stored).await {
            tracing::error!(%err, "could not persist credential, reporting login as failed");
            return Err(AuthError::NetworkFailure);
        }

        let user_id = grant.user.id.clone();
        {
            let mut session = self.session.write().await;
            session.authenticate(grant.user, grant.token);
        }
        tracing::info!(%user_id, "signed in");
        Ok(())
    }

    /// Signs out: clears the persisted credential and the in-memory session
    /// in the same logical step.
    ///
    /// A failure to clear the store is logged but never keeps the session
    /// alive.
    pub async fn logout(&self) {
        if let Err(err) = self.credentials.clear().await {
            tracing::error!(%err, "could not clear persisted credential");
        }
        self.session.write().await.clear();
        tracing::info!("signed out");
    }

    /// Restores the session from the persisted credential.
    ///
    /// Invoked once at process start. An absent, unreadable, or malformed
    /// credential leaves the session unauthenticated silently — starting
    /// signed out is the normal cold-start path, not an error. A
    /// well-formed credential populates the session without a network
    /// round trip.
    pub async fn restore_session(&self) {
        let credential = match self.credentials.load().await {
            Ok(Some(credential)) => credential,
            Ok(None) => {
                tracing::debug!("no persisted credential, starting signed out");
                return;
            }
            Err(err) => {
                tracing::warn!(%err, "unreadable persisted credential, starting signed out");
                return;
            }
        };

        if !credential.is_well_formed() {
            tracing::warn!("persisted credential is malformed, starting signed out");
            return;
        }

        let user_id = credential.user.id.clone();
        {
            let mut session = self.session.write().await;
            session.authenticate(credential.user, credential.token);
        }
        tracing::info!(%user_id, "session restored");
    }

    /// Handles a rejected authenticated call: signs out immediately and
    /// reports where navigation must go.
    pub async fn handle_session_expired(&self) -> RedirectTarget {
        tracing::info!("session expired, forcing sign-out");
        self.logout().await;
        RedirectTarget::Login
    }
}
