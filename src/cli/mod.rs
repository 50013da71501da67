//! Command-line interface and composition root.
//!
//! Loads configuration, installs the logger and assembles the single
//! [`SkillCatalog`] instance the commands run against.

pub mod commands;
pub mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};
use crate::infrastructure::transport::FileTransport;
use crate::services::SkillCatalog;
use commands::skill::SkillCommands;

/// Query the passive skill catalog
#[derive(Parser, Debug)]
#[command(name = "passive-skills", version, about)]
pub struct Cli {
    /// Configuration file (defaults to .passive-skills/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file, overrides `source.path` from the configuration
    #[arg(long, global = true)]
    pub source: Option<PathBuf>,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: SkillCommands,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(source) = &cli.source {
        config.source.path = source.display().to_string();
    }
    Ok(config)
}

/// Build the catalog from configuration and run the requested command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))
        .context("Failed to initialize logging")?;

    tracing::debug!(source = %config.source.path, "Using passive skill source");
    let transport = Arc::new(FileTransport::new(&config.source.path));
    let catalog = SkillCatalog::new(transport);

    commands::skill::execute(cli.command, &catalog, cli.json).await
}

/// Report a command failure and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
