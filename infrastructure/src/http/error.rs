//! Transport error mapping
//!
//! Converts reqwest failures and non-2xx responses into [`ApiError`],
//! attaching the user-facing hint for well-known status codes.

use serde::Deserialize;
use thiserror::Error;
use votacao_application::ApiError;

/// Errors raised while building the HTTP adapter
#[derive(Error, Debug)]
pub enum HttpSetupError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// User-facing text for status codes the API uses deliberately
pub fn status_hint(status: u16) -> Option<&'static str> {
    match status {
        404 => Some("Resource not found."),
        403 => Some("Action not permitted."),
        409 => Some("Conflicting operation (already exists)."),
        422 => Some("Request invalid for the current state."),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Extract the `message` field from an error body, if it is JSON
pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// Build the error for a non-2xx response
pub(crate) fn http_error(status: u16, body: &str) -> ApiError {
    ApiError::Http {
        status,
        message: parse_error_message(body),
        hint: status_hint(status).map(str::to_string),
    }
}

pub(crate) fn from_reqwest(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}
