//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod poll;
mod session;

pub use api::FileApiConfig;
pub use output::FileOutputConfig;
pub use poll::FilePollConfig;
pub use session::FileSessionConfig;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use votacao_application::ClientParams;

/// Problems found while validating a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("api.timeout_seconds must be greater than zero")]
    ZeroTimeout,

    #[error("session.duration_minutes must be greater than zero")]
    ZeroSessionDuration,

    #[error("poll.interval_ms must be greater than zero")]
    ZeroPollInterval,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote API settings
    pub api: FileApiConfig,
    /// Voting session settings
    pub session: FileSessionConfig,
    /// Result polling settings
    pub poll: FilePollConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(url.to_string()));
        }
        if self.api.timeout_seconds == 0 {
            issues.push(ConfigValidationError::ZeroTimeout);
        }
        if self.session.duration_minutes == 0 {
            issues.push(ConfigValidationError::ZeroSessionDuration);
        }
        if self.poll.interval_ms == 0 {
            issues.push(ConfigValidationError::ZeroPollInterval);
        }

        issues
    }

    /// Use case parameters derived from this configuration
    pub fn client_params(&self) -> ClientParams {
        ClientParams::default()
            .with_session_duration(self.session.duration_minutes)
            .with_poll_interval(Duration::from_millis(self.poll.interval_ms))
    }
}
