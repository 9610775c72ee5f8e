use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::store::SessionStore;
use crate::ui::messages::success;
use crate::utils::time::{format_timestamp, now_second};
use std::path::Path;

/// Handle the `start` command: open a session for a project.
///
/// Only one timer can run at a time. If a session already exists the
/// command fails and the running timer is left untouched.
pub fn handle(cmd: &Commands, base: &Path) -> AppResult<()> {
    if let Commands::Start { project } = cmd {
        let store = SessionStore::new(Config::session_file(base));

        if let Some(current) = store.load()? {
            return Err(AppError::AlreadyRunning(current.project_code));
        }

        let session = Session::begin(project, now_second())?;
        store.save(&session)?;

        success(format!(
            "Timer started for '{}' at {}",
            session.project_code,
            format_timestamp(&session.start_time)
        ));
    }
    Ok(())
}
