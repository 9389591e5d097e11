//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod create_item;
pub mod load_agenda;
pub mod open_session;
pub mod result_poller;
pub mod submit_vote;
pub mod voting_controller;
