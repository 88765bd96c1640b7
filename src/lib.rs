//! rtattendance library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use utils::path::expand_tilde;

/// Workspace selected by `--dir`, or the current directory.
pub fn workspace_dir(cli: &Cli) -> PathBuf {
    cli.dir
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    let workspace = workspace_dir(cli);

    // these two must work before (or despite) a valid config file
    match &cli.command {
        Commands::Init { .. } => return cli::commands::init::handle(&cli.command, &workspace),
        Commands::Config { .. } => return cli::commands::config::handle(&cli.command, &workspace),
        _ => {}
    }

    // config is read once per run
    let cfg = Config::load(&workspace)?;

    match &cli.command {
        Commands::Start => cli::commands::start::handle(&cfg),
        Commands::Members => cli::commands::members::handle(&cfg),
        Commands::Ledger { .. } => cli::commands::ledger::handle(&cli.command, &cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, &cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, &cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, &cfg),
        Commands::Init { .. } | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
