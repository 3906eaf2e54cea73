use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use statbot_logging::{bot_error, bot_info};

use crate::AppState;

type SharedState = Arc<AppState>;

pub const HELLO_TEXT: &str = "Hello from statbot!";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error response carrying a status and a `{ "error": ... }` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEmailResponse {
    pub generated_email: String,
}

pub async fn hello() -> &'static str {
    HELLO_TEXT
}

/// Forwards the caller's credentials to the identity provider and relays its JSON.
pub async fn token(
    State(state): State<SharedState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<Value>, ApiError> {
    bot_info!("Token request for user_len={}", request.username.len());
    match state
        .identity
        .password_grant(&request.username, &request.password)
        .await
    {
        Ok(body) => Ok(Json(body)),
        Err(err) => {
            bot_error!("Identity provider request failed: {}", err);
            Err(ApiError::new(
                StatusCode::BAD_GATEWAY,
                "Failed to reach identity provider",
            ))
        }
    }
}

/// Drafts an email for `data`; unreadable bodies count as missing data.
pub async fn generate_email(
    State(state): State<SharedState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateEmailResponse>, ApiError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            bot_info!("Rejected email request body: {}", rejection.body_text());
            Value::Null
        }
    };
    let Some(data) = body
        .get("data")
        .and_then(Value::as_str)
        .filter(|data| !data.is_empty())
    else {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "Missing data"));
    };

    match state.completion.complete(data).await {
        Ok(generated_email) => Ok(Json(GenerateEmailResponse { generated_email })),
        Err(err) => {
            bot_error!("Email generation failed: {}", err);
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate email",
            ))
        }
    }
}
