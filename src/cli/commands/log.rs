use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::store::LogStore;
use crate::ui::messages::info;
use crate::utils::open::FileOpener;
use crate::utils::path::expand_tilde;
use crate::utils::time::{format_hms, format_timestamp};
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// Handle the `log` command: print the time log as a table, or open the
/// CSV file for manual editing.
pub fn handle(cmd: &Commands, cfg: &Config, opener: &dyn FileOpener) -> AppResult<()> {
    if let Commands::Log { open } = cmd {
        let store = LogStore::new(expand_tilde(&cfg.log_file));

        if *open {
            if !store.exists() {
                info("Log file does not exist yet.");
                return Ok(());
            }
            opener.open(store.path())?;
            return Ok(());
        }

        let entries = store.read_all()?;
        if entries.is_empty() {
            info("Log file is empty.");
            return Ok(());
        }

        print_entries(&entries);
    }
    Ok(())
}

fn print_entries(entries: &[TimeEntry]) {
    let project_width = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(e.project_code.as_str()))
        .chain([UnicodeWidthStr::width("PROJECT")])
        .max()
        .unwrap_or(0);

    println!("📒 Time log:\n");
    println!(
        "{} | {:^19} | {:^19} | DURATION",
        pad("PROJECT", project_width),
        "START",
        "END",
    );

    for entry in entries {
        let duration = format_hms(entry.duration_seconds as i64);
        println!(
            "{} | {} | {} | {}",
            pad(&entry.project_code, project_width),
            format_timestamp(&entry.start_time),
            format_timestamp(&entry.end_time),
            Colour::Cyan.paint(duration),
        );
    }
}

/// Pad to a display width, not a char count, so wide glyphs line up.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}
