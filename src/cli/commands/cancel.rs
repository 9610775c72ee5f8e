use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::SessionStore;
use crate::ui::messages::{confirm, info, success, warning};
use std::path::Path;

/// Handle the `cancel` command: discard the running session without
/// logging anything.
///
/// This is also the escape hatch for a corrupt session file: where `stop`
/// and `status` fail loudly, `cancel` offers to clear it.
pub fn handle(cmd: &Commands, base: &Path) -> AppResult<()> {
    if let Commands::Cancel { force } = cmd {
        let store = SessionStore::new(Config::session_file(base));

        let session = match store.load() {
            Ok(None) => {
                info("No timer is currently running.");
                return Ok(());
            }
            Ok(Some(s)) => Some(s),
            Err(AppError::CorruptSession(reason)) => {
                warning(format!("Session state is unreadable ({reason})."));
                None
            }
            Err(e) => return Err(e),
        };

        if !*force {
            let subject = match &session {
                Some(s) => format!("the running timer for '{}'", s.project_code),
                None => "the unreadable session state".to_string(),
            };
            if !confirm(format!("Discard {subject}?")) {
                info("Cancel aborted.");
                return Ok(());
            }
        }

        store.clear()?;
        match session {
            Some(s) => success(format!("Discarded timer for '{}'.", s.project_code)),
            None => success("Cleared unreadable session state."),
        }
    }
    Ok(())
}
