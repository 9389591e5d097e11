//! Result dialog state

use votacao_domain::{AgendaId, Tally};

/// Lifecycle of the result dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Dialog not shown
    #[default]
    Closed,
    /// Dialog shown, first fetch in flight
    Loading,
    /// First fetch complete, poll timer active
    Polling,
    /// Session ended: timer cancelled, final tally still shown
    Settled,
}

/// Snapshot of the result dialog, published on every change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultView {
    pub state: ViewState,
    pub item: Option<AgendaId>,
    /// Latest successful fetch; `None` while loading
    pub tally: Option<Tally>,
    /// Number of tally fetches that succeeded in this lifecycle
    pub updates: u64,
}

impl ResultView {
    pub fn loading(item: AgendaId) -> Self {
        Self {
            state: ViewState::Loading,
            item: Some(item),
            tally: None,
            updates: 0,
        }
    }

    pub fn is_for(&self, id: &AgendaId) -> bool {
        self.item.as_ref() == Some(id)
    }
}
