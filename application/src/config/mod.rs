//! Application-level configuration.
//!
//! - [`ClientParams`]: session duration and result polling cadence

pub mod client_params;

pub use client_params::ClientParams;
