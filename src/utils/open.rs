//! Launching files in the platform's default application.

use crate::errors::AppResult;
use std::path::Path;
use std::process::Command;

/// Something that can hand a file over to an external viewer or editor.
///
/// Command handlers depend on this trait rather than spawning processes
/// directly, so tests can substitute a recording implementation.
pub trait FileOpener {
    fn open(&self, path: &Path) -> AppResult<()>;
}

/// Opens files with the OS default handler.
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> AppResult<()> {
        if cfg!(target_os = "windows") {
            // The empty string is the window title `start` expects first.
            Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()?;
        } else if cfg!(target_os = "macos") {
            Command::new("open").arg(path).spawn()?;
        } else {
            Command::new("xdg-open").arg(path).spawn()?;
        }
        Ok(())
    }
}
