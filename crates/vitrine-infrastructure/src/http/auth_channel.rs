//! HTTP implementation of the authentication channel.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use vitrine_core::config::EndpointConfig;
use vitrine_core::error::{AuthError, Result, VitrineError};
use vitrine_core::session::auth_channel::AuthChannel;
use vitrine_core::session::model::{AuthGrant, AuthToken, Credentials, UserProfile};

/// Auth channel that POSTs credentials to the authentication service.
#[derive(Clone)]
pub struct HttpAuthChannel {
    client: Client,
    auth_url: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: UserProfile,
}

impl HttpAuthChannel {
    /// Creates a channel with the given endpoint and request timeout.
    pub fn new(auth_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VitrineError::internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            auth_url: auth_url.into(),
        })
    }

    pub fn from_config(endpoints: &EndpointConfig) -> Result<Self> {
        Self::new(
            endpoints.auth_url.clone(),
            Duration::from_secs(endpoints.request_timeout_secs),
        )
    }
}

#[async_trait]
impl AuthChannel for HttpAuthChannel {
    async fn authenticate(&self, credentials: &Credentials) -> std::result::Result<AuthGrant, AuthError> {
        let request = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };

        let response = self
            .client
            .post(&self.auth_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("auth request failed: {}", err);
                AuthError::NetworkFailure
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AuthError::InvalidCredentials);
            }
            status if !status.is_success() => {
                tracing::warn!(%status, "auth service answered with an error status");
                return Err(AuthError::NetworkFailure);
            }
            _ => {}
        }

        let body: LoginResponse = response.json().await.map_err(|err| {
            tracing::warn!("malformed auth response: {}", err);
            AuthError::NetworkFailure
        })?;

        Ok(AuthGrant {
            token: AuthToken::new(body.token),
            user: body.user,
        })
    }
}
