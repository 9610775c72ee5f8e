//! Unified application error type.
//! All modules (store, core, guard, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Log store
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Corrupt log file: {0}")]
    CorruptLog(String),

    // ---------------------------
    // Entry validation
    // ---------------------------
    #[error("Invalid project code: {0}")]
    InvalidProject(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    // ---------------------------
    // Timer session
    // ---------------------------
    #[error("A timer is already running for project '{0}'")]
    AlreadyRunning(String),

    #[error("Corrupt session file: {0}")]
    CorruptSession(String),

    // ---------------------------
    // Single-instance lock
    // ---------------------------
    #[error("Another instance of ttrack is already running (pid {0})")]
    LockCollision(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
