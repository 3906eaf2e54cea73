//! Statbot engine: outbound HTTP clients and effect execution.
mod backend;
mod completion;
mod config;
mod engine;
mod http;
mod identity;
mod stats;
mod types;

pub use backend::{BackendClient, EmailDrafter, TokenSource};
pub use completion::{
    CompletionClient, CompletionSettings, DEFAULT_COMPLETION_BASE_URL, DEFAULT_MODEL,
    EMAIL_SYSTEM_PROMPT,
};
pub use config::{
    parse_var, ConfigError, EngineConfig, DEFAULT_BACKEND_URL, DEFAULT_NETWORK_ID,
    DEFAULT_STATS_URL,
};
pub use engine::{EngineHandle, Services};
pub use http::FetchSettings;
pub use identity::{IdentityClient, IdentitySettings, DEFAULT_CLIENT_ID, DEFAULT_TOKEN_URL};
pub use stats::{StatsClient, StatsSource};
pub use types::{EngineCommand, EngineEvent, FailureKind, FetchError};
