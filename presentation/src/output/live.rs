//! Live result rendering driven by the poller's watch channel

use tokio::sync::watch;
use votacao_application::{ResultView, ViewState};
use votacao_domain::{AgendaId, Tally};

/// Call `on_update` for every new tally until the view settles or closes
///
/// Unchanged tallies are not repeated. Returns the state that ended the loop.
pub async fn follow_result<F>(mut rx: watch::Receiver<ResultView>, mut on_update: F) -> ViewState
where
    F: FnMut(&AgendaId, &Tally),
{
    let mut last: Option<Tally> = None;

    loop {
        let view = rx.borrow_and_update().clone();

        if let (Some(id), Some(tally)) = (&view.item, view.tally)
            && last != Some(tally)
        {
            on_update(id, &tally);
            last = Some(tally);
        }

        if matches!(view.state, ViewState::Settled | ViewState::Closed) {
            return view.state;
        }

        if rx.changed().await.is_err() {
            return view.state;
        }
    }
}
