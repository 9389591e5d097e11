//! Load Agenda use case
//!
//! Fetches the agenda list, then annotates every item with its session
//! status by fetching all tallies concurrently.

use crate::ports::notifier::{Notice, Notifier};
use crate::ports::voting_api::{ApiError, VotingApi};
use crate::state::AgendaBoard;
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use votacao_domain::{AgendaItem, SessionStatus};

/// Errors that can occur while loading the agenda
#[derive(Error, Debug)]
pub enum LoadAgendaError {
    #[error("Failed to fetch agenda items: {0}")]
    ListFailed(#[from] ApiError),
}

/// Use case for (re)loading the agenda board
pub struct LoadAgendaUseCase<A: VotingApi + 'static> {
    api: Arc<A>,
    board: Arc<AgendaBoard>,
    notifier: Arc<dyn Notifier>,
}

impl<A: VotingApi + 'static> LoadAgendaUseCase<A> {
    pub fn new(api: Arc<A>, board: Arc<AgendaBoard>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            board,
            notifier,
        }
    }

    /// Load the list and replace the board.
    ///
    /// A failing list fetch leaves the board untouched. A failing tally
    /// fetch only marks that one item as closed.
    pub async fn execute(&self) -> Result<Vec<AgendaItem>, LoadAgendaError> {
        let items = match self.api.list_items().await {
            Ok(items) => items,
            Err(e) => {
                warn!("Agenda list fetch failed: {}", e);
                self.notifier
                    .notify(Notice::error("Error").with_detail("Failed to fetch agenda items"));
                return Err(e.into());
            }
        };

        info!("Fetched {} agenda items, resolving session status", items.len());

        let statuses = join_all(items.iter().map(|item| self.resolve_status(item))).await;

        let annotated: Vec<AgendaItem> = items
            .into_iter()
            .zip(statuses)
            .map(|(item, status)| item.with_status(status))
            .collect();

        self.board.replace(annotated.clone());
        Ok(annotated)
    }

    async fn resolve_status(&self, item: &AgendaItem) -> SessionStatus {
        match self.api.fetch_tally(&item.id).await {
            Ok(tally) => {
                debug!("Item {} is {}", item.id, tally.status);
                tally.status
            }
            Err(e) => {
                warn!("Tally fetch for {} failed, treating as closed: {}", item.id, e);
                SessionStatus::Closed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::notifier::Severity;
    use crate::testing::{MockApi, RecordingNotifier, closed_tally, item, open_tally};
    use votacao_domain::AgendaId;

    fn setup(api: MockApi) -> (LoadAgendaUseCase<MockApi>, Arc<AgendaBoard>, Arc<RecordingNotifier>) {
        let board = Arc::new(AgendaBoard::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = LoadAgendaUseCase::new(Arc::new(api), Arc::clone(&board), notifier.clone());
        (use_case, board, notifier)
    }

    #[tokio::test]
    async fn test_annotates_each_item_with_status() {
        let api = MockApi::new()
            .with_items(vec![item("a"), item("b")])
            .with_tallies("a", vec![Ok(open_tally(1, 0))])
            .with_tallies("b", vec![Ok(closed_tally(0, 0))]);
        let (use_case, board, _) = setup(api);

        let items = use_case.execute().await.unwrap();

        assert_eq!(items[0].status, Some(SessionStatus::Open));
        assert_eq!(items[1].status, Some(SessionStatus::Closed));
        assert_eq!(board.snapshot(), items);
    }

    #[tokio::test]
    async fn test_failed_tally_falls_back_to_closed() {
        let api = MockApi::new()
            .with_items(vec![item("a"), item("b"), item("c")])
            .with_tallies("a", vec![Ok(open_tally(2, 1))])
            .with_tallies("b", vec![Err(ApiError::http(500))])
            .with_tallies("c", vec![Ok(open_tally(0, 0))]);
        let (use_case, board, notifier) = setup(api);

        let items = use_case.execute().await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(board.len(), 3);
        assert_eq!(
            board.status_of(&AgendaId::from("a")),
            Some(SessionStatus::Open)
        );
        assert_eq!(
            board.status_of(&AgendaId::from("b")),
            Some(SessionStatus::Closed)
        );
        assert_eq!(
            board.status_of(&AgendaId::from("c")),
            Some(SessionStatus::Open)
        );
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_list_failure_leaves_board_unchanged() {
        let api = MockApi::new().with_list_error(ApiError::Network("refused".to_string()));
        let (use_case, board, notifier) = setup(api);
        board.replace(vec![item("old").with_status(SessionStatus::Open)]);

        let result = use_case.execute().await;

        assert!(matches!(result, Err(LoadAgendaError::ListFailed(_))));
        assert_eq!(board.len(), 1);
        assert_eq!(
            board.status_of(&AgendaId::from("old")),
            Some(SessionStatus::Open)
        );
        assert_eq!(notifier.count(Severity::Error), 1);
        assert_eq!(
            notifier.last().unwrap().detail.as_deref(),
            Some("Failed to fetch agenda items")
        );
    }

    #[tokio::test]
    async fn test_empty_list() {
        let (use_case, board, _) = setup(MockApi::new());
        let items = use_case.execute().await.unwrap();
        assert!(items.is_empty());
        assert!(board.is_empty());
    }
}
