use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::store::{LogStore, SessionStore};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use crate::utils::time::{format_hms, format_timestamp, now_second};
use std::path::Path;

/// Handle the `stop` command: close the running session and log it.
pub fn handle(cfg: &Config, base: &Path) -> AppResult<()> {
    let sessions = SessionStore::new(Config::session_file(base));

    let Some(session) = sessions.load()? else {
        info("No timer is currently running.");
        return Ok(());
    };

    let end_time = now_second();
    let entry = TimeEntry::from_interval(&session.project_code, session.start_time, end_time)?;

    // Append before clearing. If the process dies in between, the stale
    // session is a nuisance; a lost entry is lost work time.
    let log = LogStore::new(expand_tilde(&cfg.log_file));
    log.append(&entry)?;
    sessions.clear()?;

    success(format!(
        "Logged '{}': {} ({} -> {})",
        entry.project_code,
        format_hms(entry.duration_seconds as i64),
        format_timestamp(&entry.start_time),
        format_timestamp(&entry.end_time),
    ));
    Ok(())
}
