//! Authentication channel trait.

use async_trait::async_trait;

use crate::error::AuthError;
use crate::session::model::{AuthGrant, Credentials};

/// Channel to the authentication service.
///
/// Expected failures (rejected credentials, unreachable service) are
/// returned as typed `AuthError` values so the login surface can render
/// inline feedback.
#[async_trait]
pub trait AuthChannel: Send + Sync {
    /// Exchanges credentials for a token and user profile.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError>;
}
