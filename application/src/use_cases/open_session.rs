//! Open Session use case
//!
//! Requests a fixed-duration voting window for one agenda item. A 409
//! ("already open") is reconciled into the success path.

use crate::ports::notifier::{Notice, Notifier};
use crate::ports::voting_api::{ApiError, VotingApi};
use crate::state::AgendaBoard;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};
use votacao_domain::{AgendaId, SessionStatus};

#[derive(Error, Debug)]
pub enum OpenSessionError {
    #[error("Failed to open session: {0}")]
    Api(#[from] ApiError),
}

/// How an open-session request resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenSessionOutcome {
    /// The server opened a new session
    Opened,
    /// The server answered 409: the session was already open
    AlreadyOpen,
    /// No request sent: the item is already open on the board, or a
    /// request for it is in flight
    Skipped,
}

pub struct OpenSessionUseCase<A: VotingApi + 'static> {
    api: Arc<A>,
    board: Arc<AgendaBoard>,
    notifier: Arc<dyn Notifier>,
    duration_minutes: u32,
    in_flight: Mutex<HashSet<AgendaId>>,
}

impl<A: VotingApi + 'static> OpenSessionUseCase<A> {
    pub fn new(
        api: Arc<A>,
        board: Arc<AgendaBoard>,
        notifier: Arc<dyn Notifier>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            api,
            board,
            notifier,
            duration_minutes,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub async fn execute(&self, id: &AgendaId) -> Result<OpenSessionOutcome, OpenSessionError> {
        if self.board.status_of(id) == Some(SessionStatus::Open) {
            debug!("Session for {} already open on the board, skipping", id);
            return Ok(OpenSessionOutcome::Skipped);
        }

        if !self.begin(id) {
            debug!("Open session for {} already in flight", id);
            return Ok(OpenSessionOutcome::Skipped);
        }

        let result = self.api.open_session(id, self.duration_minutes).await;
        self.finish(id);

        match result {
            Ok(()) => {
                info!("Opened {}-minute session for {}", self.duration_minutes, id);
                self.board.set_status(id, SessionStatus::Open);
                self.notifier.notify(Notice::success("Session opened"));
                Ok(OpenSessionOutcome::Opened)
            }
            Err(e) if e.is_conflict() => {
                info!("Session for {} was already open", id);
                self.board.set_status(id, SessionStatus::Open);
                let summary = e.server_message().unwrap_or("Session was already open");
                self.notifier.notify(Notice::info(summary));
                Ok(OpenSessionOutcome::AlreadyOpen)
            }
            Err(e) => {
                warn!("Open session for {} failed: {}", id, e);
                let detail = e.user_message("Failed to open session");
                self.notifier
                    .notify(Notice::warn("Attention").with_detail(detail));
                Err(e.into())
            }
        }
    }

    fn begin(&self, id: &AgendaId) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone())
    }

    fn finish(&self, id: &AgendaId) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::notifier::Severity;
    use crate::testing::{MockApi, RecordingNotifier, item};
    use std::sync::atomic::Ordering;

    struct Fixture {
        api: Arc<MockApi>,
        board: Arc<AgendaBoard>,
        notifier: Arc<RecordingNotifier>,
        use_case: OpenSessionUseCase<MockApi>,
    }

    fn fixture(api: MockApi) -> Fixture {
        let api = Arc::new(api);
        let board = Arc::new(AgendaBoard::new());
        board.replace(vec![item("a").with_status(SessionStatus::Closed)]);
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case =
            OpenSessionUseCase::new(Arc::clone(&api), Arc::clone(&board), notifier.clone(), 60);
        Fixture {
            api,
            board,
            notifier,
            use_case,
        }
    }

    #[tokio::test]
    async fn test_success_marks_open_optimistically() {
        let f = fixture(MockApi::new());
        let id = AgendaId::from("a");

        let outcome = f.use_case.execute(&id).await.unwrap();

        assert_eq!(outcome, OpenSessionOutcome::Opened);
        assert_eq!(f.board.status_of(&id), Some(SessionStatus::Open));
        assert_eq!(f.api.tally_calls(), 0);
        assert_eq!(f.notifier.count(Severity::Success), 1);
    }

    #[tokio::test]
    async fn test_conflict_is_treated_as_success() {
        let f = fixture(MockApi::new().with_open_responses(vec![Err(
            ApiError::http(409).with_message("Sessão já aberta"),
        )]));
        let id = AgendaId::from("a");

        let outcome = f.use_case.execute(&id).await.unwrap();

        assert_eq!(outcome, OpenSessionOutcome::AlreadyOpen);
        assert_eq!(f.board.status_of(&id), Some(SessionStatus::Open));
        let notice = f.notifier.last().unwrap();
        assert_eq!(notice.severity, Severity::Info);
        assert_eq!(notice.summary, "Sessão já aberta");
    }

    #[tokio::test]
    async fn test_other_failure_warns_and_keeps_status() {
        let f = fixture(MockApi::new().with_open_responses(vec![Err(ApiError::http(404))]));
        let id = AgendaId::from("a");

        let result = f.use_case.execute(&id).await;

        assert!(result.is_err());
        assert_eq!(f.board.status_of(&id), Some(SessionStatus::Closed));
        let notice = f.notifier.last().unwrap();
        assert_eq!(notice.severity, Severity::Warn);
        assert_eq!(notice.detail.as_deref(), Some("Failed to open session"));
    }

    #[tokio::test]
    async fn test_status_hint_is_shown_without_server_message() {
        let f = fixture(MockApi::new().with_open_responses(vec![Err(ApiError::Http {
            status: 404,
            message: None,
            hint: Some("Agenda item not found.".to_string()),
        })]));

        assert!(f.use_case.execute(&AgendaId::from("a")).await.is_err());
        assert_eq!(
            f.notifier.last().unwrap().detail.as_deref(),
            Some("Agenda item not found.")
        );
    }

    #[tokio::test]
    async fn test_second_call_is_suppressed_client_side() {
        let f = fixture(MockApi::new());
        let id = AgendaId::from("a");

        let first = f.use_case.execute(&id).await.unwrap();
        let second = f.use_case.execute(&id).await.unwrap();

        assert_eq!(first, OpenSessionOutcome::Opened);
        assert_eq!(second, OpenSessionOutcome::Skipped);
        assert_eq!(f.api.open_calls.load(Ordering::SeqCst), 1);
        assert_eq!(f.board.status_of(&id), Some(SessionStatus::Open));
    }

    #[tokio::test]
    async fn test_failed_attempt_can_be_retried() {
        let f = fixture(MockApi::new().with_open_responses(vec![
            Err(ApiError::Network("reset".to_string())),
            Ok(()),
        ]));
        let id = AgendaId::from("a");

        assert!(f.use_case.execute(&id).await.is_err());
        assert_eq!(
            f.use_case.execute(&id).await.unwrap(),
            OpenSessionOutcome::Opened
        );
        assert_eq!(f.api.open_calls.load(Ordering::SeqCst), 2);
    }

    /// API whose `open_session` blocks until released
    struct GatedApi {
        gate: tokio::sync::Notify,
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait::async_trait]
    impl VotingApi for GatedApi {
        async fn list_items(&self) -> Result<Vec<votacao_domain::AgendaItem>, ApiError> {
            Ok(Vec::new())
        }

        async fn fetch_tally(&self, _id: &AgendaId) -> Result<votacao_domain::Tally, ApiError> {
            Err(ApiError::Timeout)
        }

        async fn create_item(
            &self,
            _item: &votacao_domain::NewAgendaItem,
        ) -> Result<votacao_domain::AgendaItem, ApiError> {
            Err(ApiError::Timeout)
        }

        async fn open_session(&self, _id: &AgendaId, _minutes: u32) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(())
        }

        async fn cast_vote(
            &self,
            _id: &AgendaId,
            _vote: &votacao_domain::VoteRequest,
        ) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_concurrent_open_is_suppressed_while_in_flight() {
        let api = Arc::new(GatedApi {
            gate: tokio::sync::Notify::new(),
            calls: std::sync::atomic::AtomicUsize::new(0),
        });
        let board = Arc::new(AgendaBoard::new());
        board.replace(vec![item("a")]);
        let use_case = OpenSessionUseCase::new(
            Arc::clone(&api),
            Arc::clone(&board),
            Arc::new(RecordingNotifier::default()),
            60,
        );
        let id = AgendaId::from("a");

        let (first, second) = tokio::join!(use_case.execute(&id), async {
            tokio::task::yield_now().await;
            let second = use_case.execute(&id).await;
            api.gate.notify_one();
            second
        });

        assert_eq!(first.unwrap(), OpenSessionOutcome::Opened);
        assert_eq!(second.unwrap(), OpenSessionOutcome::Skipped);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }
}
