//! Voting domain
//!
//! Tallies returned by the result endpoint, and the vote payload with its
//! locally validated voter identifier.

pub mod tally;
pub mod vote;

pub use tally::Tally;
pub use vote::{Cpf, VoteChoice, VoteRequest};
