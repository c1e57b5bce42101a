//! Configuration file loading for choiceset
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHOICESET_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./choices.toml` or `./.choices.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/choiceset/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileChoiceSetConfig, FileConfig, FileOutputConfig, FileOutputFormat};
pub use loader::ConfigLoader;
