//! rTimetracker library root.
//! Exposes the CLI parser, the high-level run() function, and the API
//! client, screen state and rendering modules behind it.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Passwd { .. } => cli::commands::passwd::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::logout::handle(cfg),
        Commands::Dashboard { .. }
        | Commands::Start
        | Commands::End
        | Commands::BreakStart
        | Commands::BreakEnd
        | Commands::Shell { .. } => cli::commands::dashboard::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once; init/config must work on a broken file
    let mut cfg = match cli.command {
        Commands::Init | Commands::Config { .. } => Config::load_unchecked()?,
        _ => Config::load()?,
    };

    // 3️⃣ command-line overrides
    if let Some(url) = &cli.api_url {
        cfg.api_base_url = url.clone();
    }
    if let Some(storage) = &cli.storage {
        cfg.storage_file = storage.clone();
    }

    // 4️⃣ logging goes to files, never to the screen
    let level = if cli.verbose { "debug" } else { cfg.log_level.as_str() };
    if let Err(e) = utils::logging::enable_logging(&Config::log_dir(), level) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }

    // 5️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
