//! In-memory UI state
//!
//! Held for the lifetime of the process and never persisted:
//!
//! - [`AgendaBoard`]: the agenda table with per-item session status
//! - [`ResultView`]: what the result dialog currently shows
//! - [`VoteDialog`]: the vote form

pub mod agenda_board;
pub mod result_view;
pub mod vote_dialog;

pub use agenda_board::AgendaBoard;
pub use result_view::{ResultView, ViewState};
pub use vote_dialog::VoteDialog;
