//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use reorder_core::ListEvent;

use crate::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "reorder")]
#[command(version)]
#[command(about = "Select items in a list and move them up or down as a block")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter (e.g. "debug", "reorder_core=trace"); overrides RUST_LOG and config
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Apply actions to a list and print the result
    Apply {
        /// Comma-separated items (default: items from config)
        #[arg(long, value_delimiter = ',')]
        items: Option<Vec<String>>,

        /// Print the final list as JSON
        #[arg(long)]
        json: bool,

        /// Actions applied in order: up, down, reset, select:N, deselect:N
        #[arg(value_name = "ACTION")]
        actions: Vec<ListEvent>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Show the effective config, numbering items for select:N
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            items,
            json,
            actions,
        } => {
            let config = config::Config::load().context("load config")?;
            logging::init(&logging::filter_directive(
                cli.log_level.as_deref(),
                &config.log_level,
            ));
            let items = items.unwrap_or(config.items);
            commands::apply::run(items, &actions, json)
        }
        Commands::Config {
            command: ConfigCommands::Path,
        } => {
            logging::init(&logging::filter_directive(
                cli.log_level.as_deref(),
                config::Config::DEFAULT_LOG_LEVEL,
            ));
            commands::config::path()
        }
        Commands::Config {
            command: ConfigCommands::Show,
        } => {
            let config = config::Config::load().context("load config")?;
            logging::init(&logging::filter_directive(
                cli.log_level.as_deref(),
                &config.log_level,
            ));
            commands::config::show(&config)
        }
    }
}
