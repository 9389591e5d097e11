//! Infrastructure layer for votacao
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP client for the voting API and
//! configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileOutputConfig,
    FilePollConfig, FileSessionConfig,
};
pub use http::{HttpSetupError, HttpVotingApi, status_hint};
