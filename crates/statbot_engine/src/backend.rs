use serde::{Deserialize, Serialize};
use statbot_logging::bot_debug;

use crate::http::{endpoint, ensure_success, map_reqwest_error};
use crate::{FetchError, FetchSettings};

/// Exchanges user credentials for a bearer token.
#[async_trait::async_trait]
pub trait TokenSource: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<String, FetchError>;
}

/// Turns an assembled prompt into generated email prose.
#[async_trait::async_trait]
pub trait EmailDrafter: Send + Sync {
    async fn draft_email(&self, prompt: &str) -> Result<String, FetchError>;
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Serialize)]
struct GenerateEmailRequest<'a> {
    data: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateEmailResponse {
    generated_email: Option<String>,
}

/// Client for the statbot backend (`/api/token`, `/generate-email`).
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    token_url: reqwest::Url,
    email_url: reqwest::Url,
}

impl BackendClient {
    pub fn new(base_url: &str, settings: &FetchSettings) -> Result<Self, FetchError> {
        Ok(Self {
            client: settings.build_client()?,
            token_url: endpoint(base_url, "api/token")?,
            email_url: endpoint(base_url, "generate-email")?,
        })
    }
}

#[async_trait::async_trait]
impl TokenSource for BackendClient {
    async fn login(&self, username: &str, password: &str) -> Result<String, FetchError> {
        bot_debug!("Requesting token for user_len={}", username.len());
        let response = self
            .client
            .post(self.token_url.clone())
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: TokenResponse = ensure_success(response)?
            .json()
            .await
            .map_err(map_reqwest_error)?;
        body.access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| FetchError::missing("access_token"))
    }
}

#[async_trait::async_trait]
impl EmailDrafter for BackendClient {
    async fn draft_email(&self, prompt: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .post(self.email_url.clone())
            .json(&GenerateEmailRequest { data: prompt })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: GenerateEmailResponse = ensure_success(response)?
            .json()
            .await
            .map_err(map_reqwest_error)?;
        body.generated_email
            .ok_or_else(|| FetchError::missing("generatedEmail"))
    }
}
