//! Test doubles shared by the use case tests

use crate::ports::notifier::{Notice, Notifier, Severity};
use crate::ports::voting_api::{ApiError, VotingApi};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use votacao_domain::{
    AgendaId, AgendaItem, NewAgendaItem, SessionStatus, Tally, VoteChoice, VoteRequest,
};

pub(crate) fn item(id: &str) -> AgendaItem {
    let created = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
    AgendaItem::new(id, format!("Item {id}"), created)
}

pub(crate) fn open_tally(yes: u64, no: u64) -> Tally {
    Tally::new(yes, no, SessionStatus::Open)
}

pub(crate) fn closed_tally(yes: u64, no: u64) -> Tally {
    Tally::new(yes, no, SessionStatus::Closed)
}

// === Scripted mock ===

/// Returns scripted responses in order and counts calls per endpoint
pub(crate) struct MockApi {
    list: Mutex<Result<Vec<AgendaItem>, ApiError>>,
    tallies: Mutex<HashMap<AgendaId, VecDeque<Result<Tally, ApiError>>>>,
    open_responses: Mutex<VecDeque<Result<(), ApiError>>>,
    vote_responses: Mutex<VecDeque<Result<(), ApiError>>>,
    create_response: Mutex<Option<Result<AgendaItem, ApiError>>>,
    pub votes: Mutex<Vec<(AgendaId, VoteRequest)>>,
    tally_calls_by_item: Mutex<HashMap<AgendaId, usize>>,
    pub list_calls: AtomicUsize,
    pub tally_calls: AtomicUsize,
    pub open_calls: AtomicUsize,
    pub vote_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            list: Mutex::new(Ok(vec![])),
            tallies: Mutex::new(HashMap::new()),
            open_responses: Mutex::new(VecDeque::new()),
            vote_responses: Mutex::new(VecDeque::new()),
            create_response: Mutex::new(None),
            votes: Mutex::new(vec![]),
            tally_calls_by_item: Mutex::new(HashMap::new()),
            list_calls: AtomicUsize::new(0),
            tally_calls: AtomicUsize::new(0),
            open_calls: AtomicUsize::new(0),
            vote_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_items(self, items: Vec<AgendaItem>) -> Self {
        *self.list.lock().unwrap() = Ok(items);
        self
    }

    pub fn with_list_error(self, error: ApiError) -> Self {
        *self.list.lock().unwrap() = Err(error);
        self
    }

    pub fn with_tallies(self, id: &str, script: Vec<Result<Tally, ApiError>>) -> Self {
        self.tallies
            .lock()
            .unwrap()
            .insert(AgendaId::from(id), VecDeque::from(script));
        self
    }

    pub fn with_open_responses(self, script: Vec<Result<(), ApiError>>) -> Self {
        *self.open_responses.lock().unwrap() = VecDeque::from(script);
        self
    }

    pub fn with_vote_responses(self, script: Vec<Result<(), ApiError>>) -> Self {
        *self.vote_responses.lock().unwrap() = VecDeque::from(script);
        self
    }

    pub fn with_create_response(self, response: Result<AgendaItem, ApiError>) -> Self {
        *self.create_response.lock().unwrap() = Some(response);
        self
    }

    pub fn tally_calls(&self) -> usize {
        self.tally_calls.load(Ordering::SeqCst)
    }

    pub fn tally_calls_for(&self, id: &str) -> usize {
        self.tally_calls_by_item
            .lock()
            .unwrap()
            .get(&AgendaId::from(id))
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl VotingApi for MockApi {
    async fn list_items(&self) -> Result<Vec<AgendaItem>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list.lock().unwrap().clone()
    }

    async fn fetch_tally(&self, id: &AgendaId) -> Result<Tally, ApiError> {
        self.tally_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .tally_calls_by_item
            .lock()
            .unwrap()
            .entry(id.clone())
            .or_default() += 1;
        self.tallies
            .lock()
            .unwrap()
            .get_mut(id)
            .and_then(|script| script.pop_front())
            .unwrap_or_else(|| Err(ApiError::Network(format!("unscripted tally for {id}"))))
    }

    async fn create_item(&self, _item: &NewAgendaItem) -> Result<AgendaItem, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(ApiError::http(500)))
    }

    async fn open_session(&self, _id: &AgendaId, _duration_minutes: u32) -> Result<(), ApiError> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        self.open_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn cast_vote(&self, id: &AgendaId, vote: &VoteRequest) -> Result<(), ApiError> {
        self.vote_calls.fetch_add(1, Ordering::SeqCst);
        self.votes.lock().unwrap().push((id.clone(), vote.clone()));
        self.vote_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

// === Stateful fake server ===

/// Behaves like the real backend: one session per item, 409 on reopen,
/// 409 on a second vote by the same CPF, 422 when the session is closed
pub(crate) struct FakeServer {
    inner: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    next_id: u32,
    items: Vec<AgendaItem>,
    open: HashSet<AgendaId>,
    votes: HashMap<AgendaId, Vec<(String, VoteChoice)>>,
}

impl FakeServer {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FakeState::default()),
        }
    }

    /// Simulate the session's closing time passing
    pub fn expire_session(&self, id: &AgendaId) {
        self.inner.lock().unwrap().open.remove(id);
    }
}

#[async_trait]
impl VotingApi for FakeServer {
    async fn list_items(&self) -> Result<Vec<AgendaItem>, ApiError> {
        Ok(self.inner.lock().unwrap().items.clone())
    }

    async fn fetch_tally(&self, id: &AgendaId) -> Result<Tally, ApiError> {
        let state = self.inner.lock().unwrap();
        let votes = state.votes.get(id).map(Vec::as_slice).unwrap_or_default();
        let yes = votes.iter().filter(|(_, c)| *c == VoteChoice::Yes).count() as u64;
        let no = votes.len() as u64 - yes;
        let status = if state.open.contains(id) {
            SessionStatus::Open
        } else {
            SessionStatus::Closed
        };
        Ok(Tally::new(yes, no, status))
    }

    async fn create_item(&self, new_item: &NewAgendaItem) -> Result<AgendaItem, ApiError> {
        let mut state = self.inner.lock().unwrap();
        state.next_id += 1;
        let created = AgendaItem::new(
            format!("pauta-{}", state.next_id),
            new_item.title(),
            Utc::now(),
        )
        .with_description(new_item.description());
        state.items.insert(0, created.clone());
        Ok(created)
    }

    async fn open_session(&self, id: &AgendaId, _duration_minutes: u32) -> Result<(), ApiError> {
        let mut state = self.inner.lock().unwrap();
        if !state.items.iter().any(|i| &i.id == id) {
            return Err(ApiError::http(404).with_message("Pauta não encontrada"));
        }
        if !state.open.insert(id.clone()) {
            return Err(ApiError::http(409).with_message("Sessão já aberta"));
        }
        Ok(())
    }

    async fn cast_vote(&self, id: &AgendaId, vote: &VoteRequest) -> Result<(), ApiError> {
        let mut state = self.inner.lock().unwrap();
        if !state.open.contains(id) {
            return Err(ApiError::http(422).with_message("Sessão encerrada"));
        }
        let ballots = state.votes.entry(id.clone()).or_default();
        if ballots.iter().any(|(cpf, _)| cpf == vote.cpf.as_str()) {
            return Err(ApiError::http(409).with_message("Associado já votou nesta pauta"));
        }
        ballots.push((vote.cpf.as_str().to_string(), vote.choice));
        Ok(())
    }
}

// === Notifier ===

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
