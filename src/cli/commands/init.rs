use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the data directory (if missing)
///  - the configuration file
///  - the CSV log file with its header row
pub fn handle(cli: &Cli, base: &Path) -> AppResult<()> {
    println!("⚙️  Initializing ttrack...");

    let cfg = Config::init_all(base, cli.test)?;
    if !cli.test {
        println!("📄 Config file: {}", Config::config_file(base).display());
    }

    let store = LogStore::new(expand_tilde(&cfg.log_file));
    store.ensure_exists()?;
    println!("🗒️  Log file: {}", store.path().display());

    println!("🎉 ttrack initialization completed!");
    Ok(())
}
