//! Products API Errors

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the catalog backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or a body that could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {message}")]
    Status {
        /// Response status
        status: StatusCode,

        /// Backend message, JSON `error` field or raw body text
        message: String,
    },

    /// The body decoded but is not the expected JSON shape.
    #[error("unexpected response: {0}")]
    UnexpectedShape(String),

    /// The body is not valid JSON for the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request URL could not be built.
    #[error("invalid url: {0}")]
    Url(String),
}

impl ApiError {
    /// Message supplied by the backend, when there is one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Whether the backend reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Extract the backend message from an error body.
///
/// The backend answers failures with `{"error": "..."}`; anything else is
/// passed through as text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .into_iter()
                .find_map(|key| value.get(key)?.as_str().map(ToString::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}
