use std::str::FromStr;
use std::time::Duration;

use crate::FetchSettings;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_STATS_URL: &str =
    "https://liq-traceability.bonbloc.in/api/v1/vitalStatsData/getCteStats";
pub const DEFAULT_NETWORK_ID: u32 = 623;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not set")]
    Missing { name: &'static str },
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Reads `name` through `lookup` and parses it; unset or blank yields `None`.
pub fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).map(|raw| raw.trim().to_string()) {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

/// Client-side settings for the widget's outbound calls.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub backend_url: String,
    pub stats_url: String,
    pub network_id: u32,
    pub fetch: FetchSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            stats_url: DEFAULT_STATS_URL.to_string(),
            network_id: DEFAULT_NETWORK_ID,
            fetch: FetchSettings::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let request_timeout = parse_var::<u64, _>(&lookup, "STATBOT_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.fetch.request_timeout);

        Ok(Self {
            backend_url: parse_var(&lookup, "STATBOT_API_BASE_URL")?
                .unwrap_or(defaults.backend_url),
            stats_url: parse_var(&lookup, "STATBOT_STATS_URL")?.unwrap_or(defaults.stats_url),
            network_id: parse_var(&lookup, "STATBOT_NETWORK_ID")?.unwrap_or(defaults.network_id),
            fetch: FetchSettings {
                request_timeout,
                ..defaults.fetch
            },
        })
    }
}
