//! Voting API port
//!
//! Defines the interface for talking to the remote voting administration API.

use async_trait::async_trait;
use thiserror::Error;
use votacao_domain::{AgendaId, AgendaItem, NewAgendaItem, Tally, VoteRequest};

/// Errors that can occur during voting API operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// Non-2xx response. `message` is the server's `message` field, `hint`
    /// the transport layer's user-facing text for well-known status codes.
    #[error("HTTP {status}: {}", http_detail(.message, .hint))]
    Http {
        status: u16,
        message: Option<String>,
        hint: Option<String>,
    },

    #[error("Invalid response: {0}")]
    Decode(String),
}

fn http_detail<'a>(message: &'a Option<String>, hint: &'a Option<String>) -> &'a str {
    message
        .as_deref()
        .filter(|m| !m.is_empty())
        .or(hint.as_deref())
        .unwrap_or("request failed")
}

impl ApiError {
    pub fn http(status: u16) -> Self {
        ApiError::Http {
            status,
            message: None,
            hint: None,
        }
    }

    pub fn with_message(self, text: impl Into<String>) -> Self {
        match self {
            ApiError::Http { status, hint, .. } => ApiError::Http {
                status,
                message: Some(text.into()),
                hint,
            },
            other => other,
        }
    }

    /// HTTP status code, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 409: the operation conflicts with existing state
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// The `message` field of the server's error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Server message, else transport hint, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message, hint, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .or(hint.as_deref())
                .unwrap_or(fallback)
                .to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Gateway to the voting administration API
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait VotingApi: Send + Sync {
    /// `GET /pautas`
    async fn list_items(&self) -> Result<Vec<AgendaItem>, ApiError>;

    /// `GET /pautas/{id}/resultado`
    async fn fetch_tally(&self, id: &AgendaId) -> Result<Tally, ApiError>;

    /// `POST /pautas`
    async fn create_item(&self, item: &NewAgendaItem) -> Result<AgendaItem, ApiError>;

    /// `POST /pautas/{id}/sessao?duracao={minutes}`
    async fn open_session(&self, id: &AgendaId, duration_minutes: u32) -> Result<(), ApiError>;

    /// `POST /pautas/{id}/votar`
    async fn cast_vote(&self, id: &AgendaId, vote: &VoteRequest) -> Result<(), ApiError>;
}
