//! Submit Vote use case
//!
//! Validates the voter identifier locally, then casts a single vote for
//! the agenda item the vote dialog targets.

use crate::ports::notifier::{Notice, Notifier};
use crate::ports::voting_api::{ApiError, VotingApi};
use crate::state::VoteDialog;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use votacao_domain::{DomainError, VoteRequest};

#[derive(Error, Debug)]
pub enum SubmitVoteError {
    #[error("Vote dialog is not open")]
    NoTarget,

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Failed to vote: {0}")]
    Api(#[from] ApiError),
}

pub struct SubmitVoteUseCase<A: VotingApi + 'static> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
}

impl<A: VotingApi + 'static> SubmitVoteUseCase<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// Submit the dialog's vote.
    ///
    /// On success the dialog is closed; on any failure it stays open with
    /// its input intact so the user can retry.
    pub async fn execute(&self, dialog: &mut VoteDialog) -> Result<(), SubmitVoteError> {
        let Some(target) = dialog.target().cloned() else {
            return Err(SubmitVoteError::NoTarget);
        };

        let request = match VoteRequest::from_input(dialog.cpf_input(), dialog.choice()) {
            Ok(r) => r,
            Err(e) => {
                self.notifier.notify(
                    Notice::warn("Invalid CPF")
                        .with_detail("Enter the 11 digits of the CPF before voting."),
                );
                return Err(e.into());
            }
        };

        match self.api.cast_vote(&target, &request).await {
            Ok(()) => {
                info!("Vote {} recorded for {}", request.choice, target);
                dialog.close();
                self.notifier.notify(Notice::success("Vote recorded"));
                Ok(())
            }
            Err(e) => {
                warn!("Vote for {} failed: {}", target, e);
                let detail = e.user_message("Failed to vote");
                self.notifier.notify(Notice::error("Error").with_detail(detail));
                Err(e.into())
            }
        }
    }
}
