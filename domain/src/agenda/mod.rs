//! Agenda domain
//!
//! Agenda items ("pautas") and their derived session status.

pub mod entities;
pub mod status;

pub use entities::{AgendaId, AgendaItem, NewAgendaItem};
pub use status::SessionStatus;
