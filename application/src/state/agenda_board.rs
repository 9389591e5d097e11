//! Agenda board: the shared agenda table

use std::sync::{Mutex, MutexGuard, PoisonError};
use votacao_domain::{AgendaId, AgendaItem, SessionStatus};

/// Agenda items currently displayed, in server order
///
/// Shared between use cases behind an `Arc`. The lock is never held
/// across an `.await`.
#[derive(Debug, Default)]
pub struct AgendaBoard {
    items: Mutex<Vec<AgendaItem>>,
}

impl AgendaBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AgendaItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the whole list (after a successful load)
    pub fn replace(&self, items: Vec<AgendaItem>) {
        *self.lock() = items;
    }

    /// Insert a newly created item at the top
    pub fn prepend(&self, item: AgendaItem) {
        self.lock().insert(0, item);
    }

    /// Mirror a status onto one item. Returns `false` if the item is not listed.
    pub fn set_status(&self, id: &AgendaId, status: SessionStatus) -> bool {
        match self.lock().iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.status = Some(status);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &AgendaId) -> Option<AgendaItem> {
        self.lock().iter().find(|item| &item.id == id).cloned()
    }

    pub fn status_of(&self, id: &AgendaId) -> Option<SessionStatus> {
        self.lock()
            .iter()
            .find(|item| &item.id == id)
            .and_then(|item| item.status)
    }

    pub fn snapshot(&self) -> Vec<AgendaItem> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
