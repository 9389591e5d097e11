//! Application layer for votacao
//!
//! This crate contains use cases, port definitions, in-memory UI state and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod state;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::ClientParams;
pub use ports::{
    notifier::{NoNotifier, Notice, Notifier, Severity},
    voting_api::{ApiError, VotingApi},
};
pub use state::{AgendaBoard, ResultView, ViewState, VoteDialog};
pub use use_cases::create_item::{CreateAgendaItemUseCase, CreateItemError};
pub use use_cases::load_agenda::{LoadAgendaError, LoadAgendaUseCase};
pub use use_cases::open_session::{OpenSessionError, OpenSessionOutcome, OpenSessionUseCase};
pub use use_cases::result_poller::{PollHandle, ResultPoller};
pub use use_cases::submit_vote::{SubmitVoteError, SubmitVoteUseCase};
pub use use_cases::voting_controller::VotingController;
