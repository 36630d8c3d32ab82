//! Failure taxonomy for backend calls.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type used across the client layer.
pub type ApiResult<T> = Result<T, ApiError>;

/// Classified outcome of a failed backend call.
///
/// Every variant is displayable to the user as-is. None of them warrants an
/// automatic retry: `Unauthorized` cannot succeed without external
/// re-authentication, and transport failures are surfaced for the caller to
/// re-issue manually if they choose.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 401/403 — token absent, expired, or insufficiently privileged.
    #[error("access denied, please sign in again")]
    Unauthorized,

    /// HTTP 404 — the addressed resource does not exist.
    #[error("not found")]
    NotFound,

    /// Any other 4xx — the service rejected the request. Carries the
    /// server-provided message verbatim when the error body has one.
    #[error("{0}")]
    ValidationRejected(String),

    /// No usable response: connection failure, timeout, or a 5xx.
    #[error("service unreachable: {0}")]
    Unreachable(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationRejected(message.into())
    }

    pub fn unreachable(detail: impl Into<String>) -> Self {
        Self::Unreachable(detail.into())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unreachable(error.to_string())
    }
}

/// Structured error body the services return on rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

const GENERIC_REJECTION: &str = "the request was rejected by the service";

/// Map a non-success HTTP status (plus whatever body came with it) into the
/// taxonomy. Pure, so it is testable without a server.
pub(crate) fn classify_status(status: StatusCode, body: &[u8]) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        _ if status.is_client_error() => ApiError::ValidationRejected(server_message(body)),
        _ => ApiError::Unreachable(format!("service responded with status {}", status.as_u16())),
    }
}

fn server_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_REJECTION.to_string())
}
