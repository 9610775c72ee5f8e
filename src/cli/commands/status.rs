use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::info;
use crate::utils::time::{format_hms, format_timestamp, now_second};
use ansi_term::Colour;
use std::path::Path;

/// Handle the `status` command: show the running timer, if any.
pub fn handle(base: &Path) -> AppResult<()> {
    let store = SessionStore::new(Config::session_file(base));

    match store.load()? {
        None => info("No timer is currently running."),
        Some(session) => {
            // Clamp: a clock set backwards must not render a negative elapsed.
            let elapsed = session.elapsed_seconds(now_second()).max(0);
            println!(
                "⏱️  Running: {} (started {}, elapsed {})",
                Colour::Green.bold().paint(session.project_code.as_str()),
                format_timestamp(&session.start_time),
                format_hms(elapsed),
            );
        }
    }
    Ok(())
}
