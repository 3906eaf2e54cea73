use std::fmt;

use statbot_core::{Category, RequestId, StatsResult};

/// Work submitted to the engine by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Login {
        username: String,
        password: String,
    },
    FetchStats {
        request_id: RequestId,
        token: String,
        category: Category,
    },
    DraftEmail {
        request_id: RequestId,
        prompt: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    LoginCompleted {
        result: Result<String, FetchError>,
    },
    StatsCompleted {
        request_id: RequestId,
        result: Result<StatsResult, FetchError>,
    },
    EmailCompleted {
        request_id: RequestId,
        result: Result<String, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        Self::new(FailureKind::MissingField(field), "field absent from response")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedResponse,
    MissingField(&'static str),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::MissingField(field) => write!(f, "missing field {field}"),
        }
    }
}
