//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, colored columns
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for choiceset_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => choiceset_domain::OutputFormat::Table,
            OutputFormat::Json => choiceset_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for choiceset
#[derive(Parser, Debug)]
#[command(name = "choiceset")]
#[command(author, version, about = "Validate and inspect immutable choice sets")]
#[command(long_about = r#"
choiceset loads (name, label) choice lists declared in TOML, freezes each one
into an immutable set, and lets you inspect the result.

Names must be unique within a set and may not shadow the set's own
accessors (pairs, names, choices, constants).

Configuration files are loaded from (in priority order):
1. CHOICESET_* environment variables
2. --config <path>     Explicit config file
3. ./choices.toml      Project-level config
4. ~/.config/choiceset/config.toml   Global config

Example:
  choiceset check
  choiceset show status
  choiceset -o json names status
  choiceset get status complete
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (overrides `[output] format`)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate every configured choice set
    Check,
    /// Print the (name, label) pairs of one set, or of all sets
    Show {
        /// Set name
        set: Option<String>,
    },
    /// Print the names of a set in declaration order
    Names {
        /// Set name
        set: String,
    },
    /// Print the constant for a declared name
    Get {
        /// Set name
        set: String,
        /// Choice name
        name: String,
    },
    /// Show configuration file locations
    Sources,
}
