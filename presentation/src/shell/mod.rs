//! Interactive shell

pub mod repl;

pub use repl::{ShellCommand, VotingShell};
