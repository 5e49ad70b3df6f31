//! API error type and the translation of HTTP failures into user-facing text.

use super::envelope::ErrorMessages;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

pub const NETWORK_MESSAGE: &str = "Network error. Please check your internet connection.";
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("{}", NETWORK_MESSAGE)]
    Network(#[source] reqwest::Error),
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,
    #[error("{message}")]
    Http { status: StatusCode, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Response error: the server returned no result")]
    MissingResult,
}

impl ApiError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }

    /// Status of an HTTP failure, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Translate a non-success response into the message shown to the user.
#[must_use]
pub fn user_message(status: StatusCode, body: &str) -> String {
    let json: Option<Value> = serde_json::from_str(body).ok();
    let detail = json.as_ref().map_or_else(|| raw_text(body), body_message);

    let message = match status.as_u16() {
        400 => detail.unwrap_or_else(|| "Invalid request. Please check your input.".to_string()),
        401 => detail.unwrap_or_else(|| "Email or password is incorrect.".to_string()),
        403 => detail.unwrap_or_else(|| {
            "Forbidden. You don't have permission to access this resource.".to_string()
        }),
        404 => json
            .as_ref()
            .and_then(|value| value.get("errorMessages"))
            .and_then(messages_from)
            .unwrap_or_else(|| "Resource not found.".to_string()),
        409 => detail.unwrap_or_else(|| "The email or phone number already exists.".to_string()),
        500 => "Something went wrong. Please try again later.".to_string(),
        _ => "An unexpected error occurred.".to_string(),
    };

    truncate(&message)
}

/// Pick the most specific message out of a JSON error body.
fn body_message(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => ["message", "errorMessages", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(messages_from)),
        Value::String(text) => raw_text(text),
        _ => None,
    }
}

fn messages_from(value: &Value) -> Option<String> {
    serde_json::from_value::<ErrorMessages>(value.clone())
        .ok()
        .and_then(|messages| messages.joined())
}

fn raw_text(body: &str) -> Option<String> {
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn truncate(message: &str) -> String {
    message.trim().chars().take(MAX_ERROR_CHARS).collect()
}
