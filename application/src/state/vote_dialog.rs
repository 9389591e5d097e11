//! Vote form state

use votacao_domain::voting::vote::only_digits;
use votacao_domain::{AgendaId, VoteChoice};

/// The vote dialog: target item, entered CPF and choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteDialog {
    target: Option<AgendaId>,
    cpf_input: String,
    choice: VoteChoice,
}

impl VoteDialog {
    /// Open for an item, resetting the form (choice defaults to YES)
    pub fn open(&mut self, target: AgendaId) {
        self.target = Some(target);
        self.cpf_input.clear();
        self.choice = VoteChoice::default();
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&AgendaId> {
        self.target.as_ref()
    }

    /// Keystroke filter: keep digits only
    pub fn set_cpf(&mut self, input: &str) {
        self.cpf_input = only_digits(input);
    }

    pub fn cpf_input(&self) -> &str {
        &self.cpf_input
    }

    pub fn set_choice(&mut self, choice: VoteChoice) {
        self.choice = choice;
    }

    pub fn choice(&self) -> VoteChoice {
        self.choice
    }
}
