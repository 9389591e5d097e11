//! Agenda domain entities

use super::status::SessionStatus;
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque agenda item identifier, as issued by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgendaId(String);

impl AgendaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgendaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgendaId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AgendaId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A topic open for voting (Entity)
///
/// `status` is not part of the server payload. It is annotated client-side
/// from the most recent tally fetch, or set optimistically after a session
/// was opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: AgendaId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "sessaoStatus", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
}

impl AgendaItem {
    pub fn new(id: impl Into<AgendaId>, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            created_at,
            status: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Status as shown to the user; an unannotated item reads as closed
    pub fn effective_status(&self) -> SessionStatus {
        self.status.unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.effective_status().is_open()
    }
}

/// Payload for creating an agenda item (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAgendaItem {
    #[serde(rename = "titulo")]
    title: String,
    #[serde(rename = "descricao")]
    description: String,
}

impl NewAgendaItem {
    /// Validate and build the payload; the title must not be blank
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        Ok(Self {
            title,
            description: description.into().trim().to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
