use statbot_engine::{
    parse_var, CompletionSettings, ConfigError, FetchSettings, IdentitySettings,
    DEFAULT_COMPLETION_BASE_URL, DEFAULT_MODEL,
};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub identity: IdentitySettings,
    pub completion: CompletionSettings,
    pub fetch: FetchSettings,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key: String = parse_var(&lookup, "OPENAI_API_KEY")?.ok_or(ConfigError::Missing {
            name: "OPENAI_API_KEY",
        })?;
        let identity_defaults = IdentitySettings::default();

        Ok(Self {
            port: parse_var(&lookup, "API_PORT")?.unwrap_or(DEFAULT_PORT),
            identity: IdentitySettings {
                token_url: parse_var(&lookup, "IDENTITY_TOKEN_URL")?
                    .unwrap_or(identity_defaults.token_url),
                client_id: parse_var(&lookup, "IDENTITY_CLIENT_ID")?
                    .unwrap_or(identity_defaults.client_id),
            },
            completion: CompletionSettings {
                base_url: parse_var(&lookup, "OPENAI_BASE_URL")?
                    .unwrap_or_else(|| DEFAULT_COMPLETION_BASE_URL.to_string()),
                api_key,
                model: parse_var(&lookup, "OPENAI_MODEL")?
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            },
            fetch: FetchSettings::default(),
        })
    }
}
