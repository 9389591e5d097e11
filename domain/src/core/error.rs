//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These are raised before anything reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid CPF: expected 11 digits, got {digits}")]
    InvalidCpf { digits: usize },

    #[error("Agenda item title cannot be empty")]
    EmptyTitle,

    #[error("Invalid session status: {0}")]
    InvalidStatus(String),

    #[error("Invalid vote choice: {0}")]
    InvalidChoice(String),
}
