use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recent::most_recent_projects;
use crate::errors::{AppError, AppResult};
use crate::store::LogStore;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Handle the `recent` command: list distinct project codes, most
/// recently started first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recent { limit } = cmd {
        let store = LogStore::new(expand_tilde(&cfg.log_file));

        // Suggestions are a convenience: a corrupt log degrades to an empty
        // list instead of failing the command.
        let entries = match store.read_all() {
            Ok(entries) => entries,
            Err(AppError::CorruptLog(reason)) => {
                warning(format!("Skipping recent projects: {reason}"));
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let limit = limit.unwrap_or(cfg.max_recent_projects);
        let projects = most_recent_projects(&entries, limit);

        if projects.is_empty() {
            info("No projects logged yet.");
            return Ok(());
        }

        for code in projects {
            println!("{code}");
        }
    }
    Ok(())
}
