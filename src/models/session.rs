use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The currently running timer.
///
/// Idle is represented by the absence of a persisted session, so this type
/// only ever describes an active one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub project_code: String,
    pub start_time: NaiveDateTime,
}

impl Session {
    /// Open a session for a project at the given instant.
    pub fn begin(project_code: &str, start_time: NaiveDateTime) -> AppResult<Self> {
        let code = project_code.trim();
        if code.is_empty() {
            return Err(AppError::InvalidProject(
                "project code must not be empty".to_string(),
            ));
        }

        Ok(Self {
            project_code: code.to_string(),
            start_time,
        })
    }

    /// Whole seconds elapsed since the session started.
    pub fn elapsed_seconds(&self, now: NaiveDateTime) -> i64 {
        (now - self.start_time).num_seconds()
    }
}
