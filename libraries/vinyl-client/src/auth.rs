//! Authentication methods for the Vinyl Vote API.

use crate::client::{error_message, parse_json, unexpected_status};
use crate::error::{ClientError, Result};
use crate::types::{LoginRequest, RegisterRequest};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};
use vinyl_core::AuthSession;

/// Authentication client for the Vinyl Vote API.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Create an account. The server logs the new account in and returns a token.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession> {
        let url = format!("{}/register", self.base_url);
        debug!(url = %url, email = %request.email, "Attempting registration");

        let session = self.post_credentials(&url, request, "registration").await?;

        info!(
            user_id = session.user.id,
            email = %session.user.email,
            "Registration successful"
        );
        Ok(session)
    }

    /// Login with email and password.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession> {
        let url = format!("{}/login", self.base_url);
        debug!(url = %url, email = %request.email, "Attempting login");

        let session = self.post_credentials(&url, request, "login").await?;

        info!(
            user_id = session.user.id,
            email = %session.user.email,
            "Login successful"
        );
        Ok(session)
    }

    /// Invalidate `token` on the server.
    pub async fn logout(&self, token: &str) -> Result<()> {
        let url = format!("{}/logout", self.base_url);
        debug!(url = %url, "Attempting remote logout");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if response.status().is_success() {
            debug!("Remote logout acknowledged");
            Ok(())
        } else {
            Err(unexpected_status(response).await)
        }
    }

    async fn post_credentials<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        what: &str,
    ) -> Result<AuthSession> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            parse_json(response, what).await
        } else if status.as_u16() == 401 {
            let message = error_message(response).await;
            warn!(status = %status, error = %message, "{} rejected: invalid credentials", what);
            Err(ClientError::AuthFailed(
                "Invalid email or password".to_string(),
            ))
        } else {
            let message = error_message(response).await;
            warn!(status = %status, error = %message, "{} rejected", what);
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
