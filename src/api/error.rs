use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::StorageError;

/// Message used when an error response carries nothing readable
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors returned by the HTTP client and every resource client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, timeout)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-2xx response; `message` is the server's text or the generic fallback
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// A required field was empty, nothing was sent
    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("No refresh token available")]
    MissingRefreshToken,

    /// The stored access token cannot be sent as a header; log in again
    #[error("Stored access token is not a valid header value")]
    InvalidToken,

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Build a server error from a failed response body.
    ///
    /// The body is read as JSON (anything else counts as an empty object)
    /// and the `message` field, then `detail`, becomes the error text.
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        let parsed: serde_json::Value =
            serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({}));

        let message = ["message", "detail"]
            .iter()
            .find_map(|key| {
                parsed
                    .get(*key)
                    .and_then(|v| v.as_str())
                    .filter(|m| !m.trim().is_empty())
            })
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string();

        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
