use statbot_logging::bot_warn;

use crate::http::{map_reqwest_error, parse_url};
use crate::{FetchError, FetchSettings};

pub const DEFAULT_TOKEN_URL: &str =
    "https://identity-server.bonbloc.in/realms/Mctrace/protocol/openid-connect/token";
pub const DEFAULT_CLIENT_ID: &str = "admin-cli";

#[derive(Debug, Clone)]
pub struct IdentitySettings {
    pub token_url: String,
    pub client_id: String,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
        }
    }
}

/// OpenID Connect password-grant client.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    client: reqwest::Client,
    token_url: reqwest::Url,
    client_id: String,
}

impl IdentityClient {
    pub fn new(settings: &IdentitySettings, fetch: &FetchSettings) -> Result<Self, FetchError> {
        Ok(Self {
            client: fetch.build_client()?,
            token_url: parse_url(&settings.token_url)?,
            client_id: settings.client_id.clone(),
        })
    }

    /// Posts the password grant and returns the provider's JSON unmodified,
    /// whatever the status code.
    pub async fn password_grant(
        &self,
        username: &str,
        password: &str,
    ) -> Result<serde_json::Value, FetchError> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
        ];
        let response = self
            .client
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            bot_warn!("Identity provider answered {}", status);
        }
        response.json().await.map_err(map_reqwest_error)
    }
}
