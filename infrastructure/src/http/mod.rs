//! HTTP adapter for the voting administration API

pub mod client;
pub mod error;

pub use client::HttpVotingApi;
pub use error::{HttpSetupError, status_hint};
