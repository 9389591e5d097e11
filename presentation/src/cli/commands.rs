//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use votacao_domain::VoteChoice;

/// Output format for listings and tallies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table and tally cards
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for votacao_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => votacao_domain::OutputFormat::Table,
            OutputFormat::Json => votacao_domain::OutputFormat::Json,
        }
    }
}

/// Vote choice as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChoiceArg {
    /// SIM
    #[value(alias = "sim")]
    Yes,
    /// NAO
    #[value(alias = "nao")]
    No,
}

impl From<ChoiceArg> for VoteChoice {
    fn from(choice: ChoiceArg) -> Self {
        match choice {
            ChoiceArg::Yes => VoteChoice::Yes,
            ChoiceArg::No => VoteChoice::No,
        }
    }
}

/// CLI arguments for votacao
#[derive(Parser, Debug)]
#[command(name = "votacao")]
#[command(author, version, about = "Client for the voting administration API")]
#[command(long_about = r#"
votacao lists agenda items (pautas), opens voting sessions, casts votes and
follows live tallies of a voting administration API.

Configuration files are loaded from (in priority order):
1. VOTACAO_API_URL / VOTACAO_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./votacao.toml      Project-level config
4. ~/.config/votacao/config.toml   Global config

Example:
  votacao list
  votacao open 42
  votacao vote 42 --cpf 123.456.789-09 --choice yes
  votacao result 42 --watch
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the voting API (overrides configuration)
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress spinners and notifications
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List agenda items with their session status
    List,

    /// Create an agenda item
    Create {
        /// Title of the item
        title: String,

        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Open a voting session for an item
    Open {
        /// Agenda item id
        id: String,

        /// Session length in minutes (default from configuration)
        #[arg(long, value_name = "MINUTES", value_parser = clap::value_parser!(u32).range(1..))]
        duration: Option<u32>,
    },

    /// Cast a vote on an item
    Vote {
        /// Agenda item id
        id: String,

        /// Voter CPF (11 digits, punctuation allowed)
        #[arg(long)]
        cpf: String,

        /// Vote choice
        #[arg(long, value_enum, default_value = "yes")]
        choice: ChoiceArg,
    },

    /// Show the tally of an item
    Result {
        /// Agenda item id
        id: String,

        /// Keep polling until the session closes
        #[arg(short, long)]
        watch: bool,
    },

    /// Interactive shell
    Shell,

    /// Show configuration file locations and exit
    Config,
}
