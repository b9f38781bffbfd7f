//! trainlog library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod settings;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use settings::Settings;
use store::RecordStore;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, settings: &Settings) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Settings { .. } => commands::settings::handle(&cli.command, cfg, settings),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg, settings),
        Commands::Stats { .. } => commands::stats::handle(&cli.command, cfg, settings),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg, settings),
        Commands::Report { .. } => commands::report::handle(&cli.command, cfg, settings),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed down
    let mut cfg = Config::load()?;

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // settings never block a command: unreadable files fall back to defaults
    let settings = Settings::load(&RecordStore::from_config(&cfg).settings_path());

    dispatch(&cli, &cfg, &settings)
}
