//! Session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use votacao_application::config::client_params::DEFAULT_SESSION_MINUTES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Voting window requested when opening a session (default: 60)
    pub duration_minutes: u32,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_SESSION_MINUTES,
        }
    }
}
