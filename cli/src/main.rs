//! CLI entrypoint for choiceset
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use choiceset_application::LoadChoicesUseCase;
use choiceset_domain::{OutputFormat, Severity};
use choiceset_infrastructure::{ConfigLoader, FileChoiceSource};
use choiceset_presentation::{Cli, Command, formatter_for};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Command::Sources = cli.command {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    if cli.no_color || !config.output.color || format == OutputFormat::Json {
        colored::control::set_override(false);
    }
    let formatter = formatter_for(format);

    info!(sets = config.sets.len(), %format, "Starting choiceset");

    // === Dependency Injection ===
    let source = Arc::new(FileChoiceSource::new(config));
    let use_case = LoadChoicesUseCase::new(source);

    match cli.command {
        Command::Check => {
            let report = use_case.check()?;
            print!("{}", formatter.format_report(&report));
            if !report.is_ok() {
                bail!("{} choice set(s) failed validation", report.failures.len());
            }
        }
        Command::Show { set: Some(name) } => {
            let set = use_case.load_set(&name)?;
            print!("{}", formatter.format_set(&name, &set));
        }
        Command::Show { set: None } => {
            let catalog = use_case.execute()?;
            print!("{}", formatter.format_catalog(&catalog));
        }
        Command::Names { set } => {
            let set = use_case.load_set(&set)?;
            print!("{}", formatter.format_names(&set));
        }
        Command::Get { set, name } => {
            let choices = use_case.load_set(&set)?;
            let value = choices.get(&name).ok_or_else(|| {
                anyhow!("'{}' is not declared in choice set '{}'", name, set)
            })?;
            println!("{}", value);
        }
        // Printed before configuration is loaded
        Command::Sources => {}
    }

    Ok(())
}
