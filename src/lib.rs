//! rBillsheet library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! import → pipeline → export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Codes => cli::commands::codes::handle(cfg),
        Commands::Transform { .. } => cli::commands::transform::handle(&cli.command, cfg),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // 2️⃣ `init` must work even when the existing file is broken
    let config_path = cli.config_path();
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli.command, &config_path);
    }

    // 3️⃣ carica config UNA sola volta
    let cfg = Config::load(&config_path)?;

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg, &config_path)
}
