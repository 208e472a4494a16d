//! HTTP client for the registration backend.
//!
//! One method per endpoint, single attempt each — whether the user may retry
//! is the caller's decision, not the client's.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::Household;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize, Default)]
struct LoginResponse {
    #[serde(rename = "sessionToken", default)]
    session_token: String,
}

#[derive(Deserialize, Default)]
struct RejectionBody {
    #[serde(default)]
    errors: HashMap<String, String>,
}

/// Client for the portal's backend endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a session token via `POST /login`.
    ///
    /// A success response whose `sessionToken` is empty or missing counts as
    /// a failed login, never as an authenticated session without credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::AuthenticationFailed);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|_| ApiError::AuthenticationFailed)?;
        if body.session_token.is_empty() {
            return Err(ApiError::AuthenticationFailed);
        }
        Ok(body.session_token)
    }

    /// Ask the backend to email a password reset link.
    pub async fn send_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.http
            .post(self.url("/send-password-reset-email"))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Submit a normalized household record via `POST /household`.
    ///
    /// On rejection the backend may answer `{"errors": {field: message}}`;
    /// that map is carried in [`ApiError::SubmissionRejected`]. The success
    /// acknowledgement body is opaque to the portal.
    pub async fn submit_household(
        &self,
        household: &Household,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self
            .http
            .post(self.url("/household"))
            .json(household)
            .send()
            .await?;

        if response.status().is_success() {
            let ack = response.json().await.unwrap_or(serde_json::Value::Null);
            return Ok(ack);
        }

        let status = response.status();
        let body: RejectionBody = response.json().await.unwrap_or_default();
        tracing::warn!("household submission rejected with status {status}");
        Err(ApiError::SubmissionRejected { errors: body.errors })
    }
}
