//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: local validation errors

pub mod error;
