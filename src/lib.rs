//! ttrack library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (store, core, guard, config, ui, utils).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod guard;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use guard::InstanceLock;
use std::path::{Path, PathBuf};
use utils::open::SystemOpener;

/// Route a parsed command to its handler.
pub fn dispatch(cli: &Cli, cfg: &Config, base: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, base),
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, base),
        Commands::Stop => cli::commands::stop::handle(cfg, base),
        Commands::Cancel { .. } => cli::commands::cancel::handle(&cli.command, base),
        Commands::Status => cli::commands::status::handle(base),
        Commands::Recent { .. } => cli::commands::recent::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg, &SystemOpener),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg, &SystemOpener),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, base),
    }
}

/// Parse the command line, take the single-instance lock, load the
/// configuration and run the requested command.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // The guard comes first: nothing may touch the log or the session
    // before the lock is held.
    let lock_path = cli
        .lock_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(guard::default_lock_path);
    let lock = InstanceLock::acquire(&lock_path)?;

    let base = cli
        .data_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_dir);

    let result = Config::load_from(&base).and_then(|cfg| dispatch(&cli, &cfg, &base));

    // Released on success and on error alike. release() reports its own
    // failures and never masks the command's result.
    lock.release();
    result
}
