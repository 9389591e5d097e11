//! Client parameters: use case timing control.
//!
//! [`ClientParams`] groups the static parameters that control how the use
//! cases talk to the voting API. These are application-layer concerns, not
//! domain policy.

use std::time::Duration;

/// Default voting window requested when opening a session, in minutes.
pub const DEFAULT_SESSION_MINUTES: u32 = 60;

/// Default period between result polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientParams {
    /// Duration passed as `duracao` when opening a session.
    pub session_duration_minutes: u32,
    /// Fixed period of the result poller timer.
    pub poll_interval: Duration,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            session_duration_minutes: DEFAULT_SESSION_MINUTES,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ClientParams {
    pub fn with_session_duration(mut self, minutes: u32) -> Self {
        self.session_duration_minutes = minutes;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}
