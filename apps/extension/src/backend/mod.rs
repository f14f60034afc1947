//! Backend client — the single point of entry for all HTTP calls to the
//! session backend. No other module talks to the backend directly.
//!
//! Three operations: exchange a platform token for a session credential,
//! request CV generation, and request profile generation. Failures are
//! surfaced per call; callers render them as status text, nothing retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod paths;

use crate::auth::session::{AuthSession, SessionUser};

const EXCHANGE_PATH: &str = "/auth/exchange";
const GENERATE_CV_PATH: &str = "/generate-cv";
const GENERATE_PROFILE_PATH: &str = "/generate-profile";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ExchangeRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExchangeResponse {
    #[serde(flatten)]
    user: SessionUser,
    #[serde(rename = "idToken")]
    id_token: String,
}

#[derive(Debug, Serialize)]
struct GenerateCvRequest<'a> {
    profil: &'a Value,
    cv_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateCvResponse {
    success: bool,
}

/// Trait boundary the handshake depends on, so tests can fake the exchange
/// without a server.
#[async_trait]
pub trait SessionExchange: Send + Sync {
    async fn exchange(&self, platform_token: &str) -> Result<AuthSession, BackendError>;
}

/// HTTP client for the session backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        BackendClient {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /generate-cv with bearer auth and `{profil, cv_name}`.
    pub async fn generate_cv(
        &self,
        bearer: &str,
        profil: &Value,
        cv_name: &str,
    ) -> Result<bool, BackendError> {
        let response = self
            .client
            .post(self.url(GENERATE_CV_PATH))
            .bearer_auth(bearer)
            .json(&GenerateCvRequest { profil, cv_name })
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: GenerateCvResponse = response.json().await?;
        debug!(cv_name, success = body.success, "generate-cv completed");
        Ok(body.success)
    }

    /// POST /generate-profile with bearer auth; returns the profile document
    /// as arbitrary JSON.
    pub async fn generate_profile(&self, bearer: &str) -> Result<Value, BackendError> {
        let response = self
            .client
            .post(self.url(GENERATE_PROFILE_PATH))
            .bearer_auth(bearer)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SessionExchange for BackendClient {
    async fn exchange(&self, platform_token: &str) -> Result<AuthSession, BackendError> {
        let response = self
            .client
            .post(self.url(EXCHANGE_PATH))
            .json(&ExchangeRequest {
                token: platform_token,
            })
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: ExchangeResponse = response.json().await?;
        debug!(uid = %body.user.uid, "credential exchange succeeded");
        Ok(AuthSession::new(body.user, body.id_token))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(BackendError::Api {
        status: status.as_u16(),
        message,
    })
}
