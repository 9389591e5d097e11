//! Result polling configuration from TOML (`[poll]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollConfig {
    /// Period between result fetches in milliseconds (default: 2000)
    pub interval_ms: u64,
}

impl Default for FilePollConfig {
    fn default() -> Self {
        Self { interval_ms: 2000 }
    }
}
