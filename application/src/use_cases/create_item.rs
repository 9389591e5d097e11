//! Create Agenda Item use case
//!
//! Posts a new agenda item, hydrates its status with a single tally fetch
//! and puts it at the top of the board.

use crate::ports::notifier::{Notice, Notifier};
use crate::ports::voting_api::{ApiError, VotingApi};
use crate::state::AgendaBoard;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use votacao_domain::{AgendaItem, DomainError, NewAgendaItem, SessionStatus};

#[derive(Error, Debug)]
pub enum CreateItemError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Could not create agenda item: {0}")]
    Api(#[from] ApiError),
}

pub struct CreateAgendaItemUseCase<A: VotingApi + 'static> {
    api: Arc<A>,
    board: Arc<AgendaBoard>,
    notifier: Arc<dyn Notifier>,
}

impl<A: VotingApi + 'static> CreateAgendaItemUseCase<A> {
    pub fn new(api: Arc<A>, board: Arc<AgendaBoard>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            board,
            notifier,
        }
    }

    pub async fn execute(
        &self,
        title: &str,
        description: &str,
    ) -> Result<AgendaItem, CreateItemError> {
        let payload = match NewAgendaItem::new(title, description) {
            Ok(p) => p,
            Err(e) => {
                self.notifier
                    .notify(Notice::warn("Invalid agenda item").with_detail(e.to_string()));
                return Err(e.into());
            }
        };

        let created = match self.api.create_item(&payload).await {
            Ok(item) => item,
            Err(e) => {
                warn!("Create agenda item failed: {}", e);
                self.notifier
                    .notify(Notice::error("Error").with_detail("Could not create agenda item"));
                return Err(e.into());
            }
        };

        let status = match self.api.fetch_tally(&created.id).await {
            Ok(tally) => tally.status,
            Err(e) => {
                warn!("Tally fetch for new item {} failed: {}", created.id, e);
                SessionStatus::Closed
            }
        };

        let item = created.with_status(status);
        info!("Created agenda item {} ({})", item.id, item.title);
        self.board.prepend(item.clone());
        self.notifier.notify(Notice::success("Agenda item created"));
        Ok(item)
    }
}
