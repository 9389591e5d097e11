//! Session status value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Whether an agenda item's voting session currently accepts votes
///
/// On the wire the server speaks Portuguese (`"ABERTA"` / `"ENCERRADA"`);
/// parsing is lenient about case and surrounding whitespace and also
/// accepts the English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SessionStatus {
    /// Session open, votes accepted
    Open,
    /// No session, or the session expired
    #[default]
    Closed,
}

impl SessionStatus {
    /// Wire representation used by the API
    pub fn as_wire(&self) -> &'static str {
        match self {
            SessionStatus::Open => "ABERTA",
            SessionStatus::Closed => "ENCERRADA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SessionStatus::Open => "OPEN",
            SessionStatus::Closed => "CLOSED",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SessionStatus::Open)
    }

    /// Anything other than an open session, including no value, is closed
    pub fn from_wire_lenient(raw: Option<&str>) -> Self {
        match raw.map(str::parse) {
            Some(Ok(status)) => status,
            _ => SessionStatus::Closed,
        }
    }
}

/// Serde helper for payloads whose status may be null or unrecognised
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<SessionStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(SessionStatus::from_wire_lenient(raw.as_deref()))
}

impl FromStr for SessionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ABERTA" | "OPEN" => Ok(SessionStatus::Open),
            "ENCERRADA" | "CLOSED" => Ok(SessionStatus::Closed),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for SessionStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        status.as_wire().to_string()
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
