//! Presentation layer for votacao
//!
//! This crate contains CLI definitions, output formatters, console
//! notifications, loading spinners and the interactive shell.

pub mod cli;
pub mod output;
pub mod progress;
pub mod shell;

// Re-export commonly used types
pub use cli::commands::{ChoiceArg, Cli, Command, OutputFormat};
pub use output::{
    ConsoleFormatter, ConsoleNotifier, JsonFormatter, OutputFormatter, follow_result,
    formatter_for,
};
pub use progress::LoadingSpinner;
pub use shell::{ShellCommand, VotingShell};
