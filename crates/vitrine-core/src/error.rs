//! Error types for the Vitrine application.
//!
//! `VitrineError` covers infrastructure faults (I/O, serialization,
//! configuration). Expected domain failures use the dedicated `AuthError`
//! and `FetchError` taxonomies so callers can render inline feedback
//! instead of unwinding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Vitrine application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize)]
pub enum VitrineError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Security/authentication error
    #[error("Security error: {0}")]
    Security(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VitrineError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for VitrineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for VitrineError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for VitrineError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for VitrineError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<String> for VitrineError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, VitrineError>`.
pub type Result<T> = std::result::Result<T, VitrineError>;

/// Expected failures of the authentication channel and session lifecycle.
///
/// These are returned as values, never panicked, so the login form can show
/// inline feedback and the session layer can redirect on expiry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthError {
    /// The credentials were rejected by the authentication service.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The authentication service (or credential store) could not be reached.
    #[error("authentication service unreachable")]
    NetworkFailure,

    /// A previously valid session was rejected; the user must sign in again.
    #[error("session expired")]
    SessionExpired,
}

/// Expected failures of the data-fetch channels (metrics, listings).
///
/// Surfaced as non-blocking notices while stale data remains displayed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchError {
    /// The service could not be reached.
    #[error("service unreachable")]
    NetworkFailure,

    /// The service answered with an error status.
    #[error("server error")]
    ServerError,

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_helpers() {
        let err = VitrineError::not_found("Order", "ord-1");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Order 'ord-1'");

        let err = VitrineError::config("missing route table");
        assert!(err.is_config());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: VitrineError = io.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_auth_error_serde_round_trip() {
        let json = serde_json::to_string(&AuthError::InvalidCredentials).unwrap();
        assert_eq!(json, "\"invalid_credentials\"");
        let back: AuthError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AuthError::InvalidCredentials);
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }
}
