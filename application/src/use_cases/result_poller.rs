//! Result Poller use case
//!
//! Drives the result dialog: fetch the tally once when the dialog opens,
//! then re-fetch on a fixed period until the server reports the session
//! is no longer open.
//!
//! # Lifecycle
//!
//! ```text
//!   Closed ──open(X)──▶ Loading ──first fetch──▶ Polling ──status != OPEN──▶ Settled
//!     ▲                                             │                          │
//!     └────────────────────close()──────────────────┴──────────────────────────┘
//! ```
//!
//! The timer task is owned by a [`PollHandle`] held only by the
//! [`ResultPoller`]. Opening another view, closing the dialog, or dropping
//! the poller all cancel it; a cancelled task never touches state again.

use crate::ports::notifier::{Notice, Notifier};
use crate::ports::voting_api::VotingApi;
use crate::state::{AgendaBoard, ResultView, ViewState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use votacao_domain::{AgendaId, Tally};

/// Ownership of the single active poll timer.
///
/// Dropping the handle cancels the task. [`PollHandle::cancel`] also waits
/// for the task to exit.
pub struct PollHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    fn new(token: CancellationToken, task: JoinHandle<()>) -> Self {
        Self {
            token,
            task: Some(task),
        }
    }

    /// Whether the poll task has stopped on its own (session ended)
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancel the timer and wait until the task has exited
    pub async fn cancel(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
            && e.is_panic()
        {
            warn!("Result poll task panicked: {}", e);
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Everything one poll lifecycle needs, moved into the timer task
struct PollWorker<A: VotingApi + 'static> {
    api: Arc<A>,
    board: Arc<AgendaBoard>,
    notifier: Arc<dyn Notifier>,
    view: Arc<watch::Sender<ResultView>>,
    item: AgendaId,
    token: CancellationToken,
}

impl<A: VotingApi + 'static> PollWorker<A> {
    /// Fetch the tally, publish it and mirror its status onto the board
    async fn refresh(&self) -> Option<Tally> {
        let result = self.api.fetch_tally(&self.item).await;
        if self.token.is_cancelled() {
            return None;
        }

        match result {
            Ok(tally) => {
                self.view.send_modify(|view| {
                    if view.is_for(&self.item) {
                        view.tally = Some(tally);
                        view.updates += 1;
                    }
                });
                self.board.set_status(&self.item, tally.status);
                debug!(
                    "Tally for {}: {} yes / {} no ({})",
                    self.item, tally.yes, tally.no, tally.status
                );
                Some(tally)
            }
            Err(e) => {
                warn!("Tally fetch for {} failed: {}", self.item, e);
                self.notifier
                    .notify(Notice::error("Error").with_detail("Failed to fetch result"));
                None
            }
        }
    }

    /// Timer loop. Ticks are strictly sequential: the next tick is awaited
    /// only after the previous fetch completed.
    async fn run(self, period: Duration) {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => return,
                _ = ticker.tick() => {}
            }

            let fetched = tokio::select! {
                biased;
                _ = self.token.cancelled() => return,
                fetched = self.refresh() => fetched,
            };

            if let Some(tally) = fetched
                && !tally.is_open()
            {
                info!("Session for {} is {}, stopping result poll", self.item, tally.status);
                self.view.send_modify(|view| {
                    if view.is_for(&self.item) {
                        view.state = ViewState::Settled;
                    }
                });
                return;
            }
        }
    }
}

/// Use case owning the result dialog and its poll timer
pub struct ResultPoller<A: VotingApi + 'static> {
    api: Arc<A>,
    board: Arc<AgendaBoard>,
    notifier: Arc<dyn Notifier>,
    period: Duration,
    view: Arc<watch::Sender<ResultView>>,
    active: Option<PollHandle>,
}

impl<A: VotingApi + 'static> ResultPoller<A> {
    pub fn new(
        api: Arc<A>,
        board: Arc<AgendaBoard>,
        notifier: Arc<dyn Notifier>,
        period: Duration,
    ) -> Self {
        let (view, _) = watch::channel(ResultView::default());
        Self {
            api,
            board,
            notifier,
            period,
            view: Arc::new(view),
            active: None,
        }
    }

    /// Receive every change of the result dialog
    pub fn subscribe(&self) -> watch::Receiver<ResultView> {
        self.view.subscribe()
    }

    /// Current dialog snapshot
    pub fn view(&self) -> ResultView {
        self.view.borrow().clone()
    }

    /// Whether a poll timer is currently running
    pub fn is_polling(&self) -> bool {
        self.active.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Open the result dialog for `item`.
    ///
    /// Cancels any previous timer, fetches immediately, then starts the
    /// repeating timer. Returns the first tally if that fetch succeeded.
    pub async fn open(&mut self, item: AgendaId) -> Option<Tally> {
        self.stop().await;

        info!("Opening result view for {}", item);
        self.view.send_replace(ResultView::loading(item.clone()));

        let worker = PollWorker {
            api: Arc::clone(&self.api),
            board: Arc::clone(&self.board),
            notifier: Arc::clone(&self.notifier),
            view: Arc::clone(&self.view),
            item,
            token: CancellationToken::new(),
        };

        let first = worker.refresh().await;
        self.view.send_modify(|view| view.state = ViewState::Polling);

        let token = worker.token.clone();
        let task = tokio::spawn(worker.run(self.period));
        self.active = Some(PollHandle::new(token, task));

        first
    }

    /// Close the dialog: cancel any timer and discard polling state
    pub async fn close(&mut self) {
        self.stop().await;
        self.view.send_replace(ResultView::default());
        debug!("Result view closed");
    }

    async fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.cancel().await;
        }
    }
}
