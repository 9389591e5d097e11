//! VotingController - the client's single entry point
//!
//! Owns the shared UI state ([`AgendaBoard`], [`VoteDialog`], the result
//! dialog) and routes user actions to the individual use cases. The
//! presentation layer only ever talks to this type.

use crate::config::ClientParams;
use crate::ports::notifier::Notifier;
use crate::ports::voting_api::VotingApi;
use crate::state::{AgendaBoard, ResultView, VoteDialog};
use crate::use_cases::create_item::{CreateAgendaItemUseCase, CreateItemError};
use crate::use_cases::load_agenda::{LoadAgendaError, LoadAgendaUseCase};
use crate::use_cases::open_session::{OpenSessionError, OpenSessionOutcome, OpenSessionUseCase};
use crate::use_cases::result_poller::ResultPoller;
use crate::use_cases::submit_vote::{SubmitVoteError, SubmitVoteUseCase};
use std::sync::Arc;
use tokio::sync::watch;
use votacao_domain::{AgendaId, AgendaItem, Tally, VoteChoice};

pub struct VotingController<A: VotingApi + 'static> {
    board: Arc<AgendaBoard>,
    loader: LoadAgendaUseCase<A>,
    creator: CreateAgendaItemUseCase<A>,
    opener: OpenSessionUseCase<A>,
    voter: SubmitVoteUseCase<A>,
    poller: ResultPoller<A>,
    vote_dialog: VoteDialog,
}

impl<A: VotingApi + 'static> VotingController<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>, params: ClientParams) -> Self {
        let board = Arc::new(AgendaBoard::new());
        Self {
            loader: LoadAgendaUseCase::new(
                Arc::clone(&api),
                Arc::clone(&board),
                Arc::clone(&notifier),
            ),
            creator: CreateAgendaItemUseCase::new(
                Arc::clone(&api),
                Arc::clone(&board),
                Arc::clone(&notifier),
            ),
            opener: OpenSessionUseCase::new(
                Arc::clone(&api),
                Arc::clone(&board),
                Arc::clone(&notifier),
                params.session_duration_minutes,
            ),
            voter: SubmitVoteUseCase::new(Arc::clone(&api), Arc::clone(&notifier)),
            poller: ResultPoller::new(api, Arc::clone(&board), notifier, params.poll_interval),
            board,
            vote_dialog: VoteDialog::default(),
        }
    }

    // ==================== Agenda ====================

    pub fn board(&self) -> &AgendaBoard {
        &self.board
    }

    pub fn items(&self) -> Vec<AgendaItem> {
        self.board.snapshot()
    }

    pub async fn refresh(&self) -> Result<Vec<AgendaItem>, LoadAgendaError> {
        self.loader.execute().await
    }

    pub async fn create_item(
        &self,
        title: &str,
        description: &str,
    ) -> Result<AgendaItem, CreateItemError> {
        self.creator.execute(title, description).await
    }

    pub async fn open_session(
        &self,
        id: &AgendaId,
    ) -> Result<OpenSessionOutcome, OpenSessionError> {
        self.opener.execute(id).await
    }

    // ==================== Voting ====================

    /// Open the vote dialog for an item with a fresh form
    pub fn begin_vote(&mut self, id: AgendaId) -> &mut VoteDialog {
        self.vote_dialog.open(id);
        &mut self.vote_dialog
    }

    pub fn vote_dialog(&self) -> &VoteDialog {
        &self.vote_dialog
    }

    pub fn vote_dialog_mut(&mut self) -> &mut VoteDialog {
        &mut self.vote_dialog
    }

    pub fn cancel_vote(&mut self) {
        self.vote_dialog.close();
    }

    pub async fn submit_vote(&mut self) -> Result<(), SubmitVoteError> {
        self.voter.execute(&mut self.vote_dialog).await
    }

    /// Open the dialog, fill it in and submit in one step
    pub async fn vote(
        &mut self,
        id: AgendaId,
        cpf: &str,
        choice: VoteChoice,
    ) -> Result<(), SubmitVoteError> {
        let dialog = self.begin_vote(id);
        dialog.set_cpf(cpf);
        dialog.set_choice(choice);
        self.submit_vote().await
    }

    // ==================== Results ====================

    pub async fn open_result(&mut self, id: AgendaId) -> Option<Tally> {
        self.poller.open(id).await
    }

    pub async fn close_result(&mut self) {
        self.poller.close().await;
    }

    pub fn result_view(&self) -> ResultView {
        self.poller.view()
    }

    pub fn subscribe_result(&self) -> watch::Receiver<ResultView> {
        self.poller.subscribe()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_polling()
    }
}
