//! HTTP server wiring for the statbot backend.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use statbot_engine::{CompletionClient, IdentityClient};
use statbot_logging::bot_info;
use tower_http::cors::{Any, CorsLayer};

use crate::routes;
use crate::ServerConfig;

/// Upstream clients shared across handlers.
pub struct AppState {
    pub identity: IdentityClient,
    pub completion: CompletionClient,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            identity: IdentityClient::new(&config.identity, &config.fetch)?,
            completion: CompletionClient::new(&config.completion, &config.fetch)?,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]);

    Router::new()
        .route("/hello", get(routes::hello))
        .route("/api/token", post(routes::token))
        .route("/generate-email", post(routes::generate_email))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds the configured port and serves until the process is stopped.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let app = build_router(AppState::from_config(&config)?);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    bot_info!("Server is listening on port {}...", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
