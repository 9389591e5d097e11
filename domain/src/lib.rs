//! Domain layer for votacao
//!
//! This crate contains the entities and value objects of the voting
//! administration client. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Agenda (Pauta)
//!
//! An agenda item is a topic open for voting. Its session status is never
//! stored by the server alongside the item; the client derives it from the
//! most recent tally.
//!
//! ## Voting
//!
//! - **Session (Sessão)**: a time-bounded window during which votes may be cast
//! - **Tally (Resultado)**: aggregate vote counts plus the current session status
//! - **CPF**: the 11-digit voter identifier, the server's de-duplication key

pub mod agenda;
pub mod config;
pub mod core;
pub mod voting;

// Re-export commonly used types
pub use agenda::{
    entities::{AgendaId, AgendaItem, NewAgendaItem},
    status::SessionStatus,
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use voting::{
    tally::Tally,
    vote::{Cpf, VoteChoice, VoteRequest},
};
