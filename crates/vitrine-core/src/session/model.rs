//! Session domain models.
//!
//! The `Session` is the authenticated identity bound to the current process.
//! It is created unauthenticated at startup and mutated only by the
//! session store (login, logout, restore); every other component observes
//! it read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A permission label required to access a gated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full back-office access.
    Admin,
    /// Order handling and catalog maintenance.
    Staff,
    /// Storefront only.
    Customer,
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: String,
    /// Login email address
    pub email: String,
    /// Name shown in the header and on invoices
    pub display_name: String,
    /// Capability label consulted by the access guard
    pub role: Role,
}

/// Opaque credential issued by the authentication service.
///
/// The token contents are never interpreted by this application; it is
/// stored, replayed on requests, and discarded on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(pub String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Login form input.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Passwords must never reach logs or error messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful response of the authentication channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub token: AuthToken,
    pub user: UserProfile,
}

/// The payload persisted under the single credential-store key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub token: AuthToken,
    pub user: UserProfile,
    /// When the credential was written; informational only.
    pub stored_at: DateTime<Utc>,
}

impl StoredCredential {
    pub fn new(grant: &AuthGrant) -> Self {
        Self {
            token: grant.token.clone(),
            user: grant.user.clone(),
            stored_at: Utc::now(),
        }
    }

    /// A credential with an empty token cannot authenticate a session.
    pub fn is_well_formed(&self) -> bool {
        !self.token.as_str().is_empty() && !self.user.id.is_empty()
    }
}

/// The authenticated identity bound to the current process.
///
/// Invariant: the session is authenticated exactly when both `user` and
/// `token` are present. The two fields are only ever set together
/// (`authenticate`) or cleared together (`clear`), so no observer can see
/// one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    user: Option<UserProfile>,
    token: Option<AuthToken>,
}

impl Session {
    /// Creates a new unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the session from a grant, replacing any prior identity.
    pub fn authenticate(&mut self, user: UserProfile, token: AuthToken) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Resets the session to the unauthenticated state.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// The current user's role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> UserProfile {
        UserProfile {
            id: "usr-1".to_string(),
            email: "admin@vitrine.example".to_string(),
            display_name: "Admin".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_session_starts_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_authenticate_then_clear() {
        let mut session = Session::new();
        session.authenticate(admin(), AuthToken::new("tok-1"));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Admin));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("a@x.com", "hunter2");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("a@x.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_stored_credential_well_formed() {
        let grant = AuthGrant {
            token: AuthToken::new("tok-1"),
            user: admin(),
        };
        assert!(StoredCredential::new(&grant).is_well_formed());

        let empty = StoredCredential {
            token: AuthToken::new(""),
            user: admin(),
            stored_at: Utc::now(),
        };
        assert!(!empty.is_well_formed());
    }

    #[test]
    fn test_stored_credential_round_trip() {
        let grant = AuthGrant {
            token: AuthToken::new("tok-1"),
            user: admin(),
        };
        let stored = StoredCredential::new(&grant);
        let json = serde_json::to_string(&stored).unwrap();
        let back: StoredCredential = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stored);
    }
}
