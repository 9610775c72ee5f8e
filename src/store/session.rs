//! Durable storage for the running timer.
//!
//! The session outlives a single CLI invocation: `start` writes it here and
//! a later `stop`, `status` or `cancel` reads it back. No file means no
//! timer is running.

use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted session, or `None` when no timer is running.
    pub fn load(&self) -> AppResult<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session = serde_yaml::from_str(&raw)
            .map_err(|e| AppError::CorruptSession(format!("{}: {e}", self.path.display())))?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(session)
            .map_err(|e| io::Error::other(format!("session serialization error: {e}")))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Remove the session file. Already-absent is not an error, so clearing
    /// is safe to repeat.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
