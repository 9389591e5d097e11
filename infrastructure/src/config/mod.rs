//! Configuration file loading for votacao
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VOTACAO_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./votacao.toml` or `./.votacao.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/votacao/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApiConfig, FileConfig, FileOutputConfig, FilePollConfig,
    FileSessionConfig,
};
pub use loader::ConfigLoader;
