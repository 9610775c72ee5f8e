use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::{info, success};
use crate::utils::open::FileOpener;
use crate::utils::path::expand_tilde;
use crate::utils::time::now_second;
use std::fs;

/// Handle the `report` command: aggregate the full log and write the
/// text report, overwriting any previous one.
pub fn handle(cmd: &Commands, cfg: &Config, opener: &dyn FileOpener) -> AppResult<()> {
    if let Commands::Report { print, open } = cmd {
        let store = LogStore::new(expand_tilde(&cfg.log_file));
        let entries = store.read_all()?;

        let Some(rendered) = report::render(&entries, now_second()) else {
            info("Log file is empty.");
            return Ok(());
        };

        let path = expand_tilde(&cfg.report_file);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &rendered)?;
        success(format!("Report generated: {}", path.display()));

        if *print {
            println!("\n{rendered}");
        }
        if *open {
            opener.open(&path)?;
        }
    }
    Ok(())
}
