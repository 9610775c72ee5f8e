//! Single-instance guard.
//!
//! A lock file in the OS temporary directory holds the pid of the owning
//! process. On startup the pid is checked against the live process table:
//! a dead or unreadable owner means the previous run crashed, and the lock
//! is reclaimed; a live owner refuses startup and the file is left alone.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use sysinfo::{Pid, ProcessesToUpdate, System};

/// Well-known lock location shared by every invocation: `<tmp>/ttrack.lock`.
pub fn default_lock_path() -> PathBuf {
    std::env::temp_dir().join("ttrack.lock")
}

/// Holds the lock for the lifetime of the process.
pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    /// Take the lock, reclaiming it from a dead owner if necessary.
    ///
    /// Fails with [`AppError::LockCollision`] when the recorded pid belongs
    /// to a live process.
    pub fn acquire(path: &Path) -> AppResult<Self> {
        if path.exists() {
            match read_owner_pid(path) {
                Some(pid) if process_alive(pid) => {
                    return Err(AppError::LockCollision(pid));
                }
                Some(_) => info("Found a stale lock file. The application will start."),
                None => warning("Found a corrupt lock file. The application will start."),
            }
        }

        let mut file = fs::File::create(path)?;
        file.write_all(std::process::id().to_string().as_bytes())?;
        // The pid has to hit the disk: a crash right after startup must
        // still leave a readable owner behind.
        file.sync_all()?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Delete the lock file.
    ///
    /// Failure is reported but never fatal. Worst case the file stays
    /// behind with a dead pid, and the next start reclaims it.
    pub fn release(self) {
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != ErrorKind::NotFound
        {
            warning(format!("Could not remove lock file: {e}"));
        }
    }
}

fn read_owner_pid(path: &Path) -> Option<u32> {
    let raw = fs::read_to_string(path).ok()?;
    raw.trim().parse().ok()
}

/// Ask the OS whether a process with this pid currently exists.
fn process_alive(pid: u32) -> bool {
    let pid = Pid::from_u32(pid);
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    sys.process(pid).is_some()
}
