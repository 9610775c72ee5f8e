#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("ttrack")
}

/// Create a unique test data dir path inside the system temp dir and remove
/// anything a previous run left behind
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ttrack_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Unique lock file per test so parallel test processes never collide
pub fn setup_lock_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ttrack.lock", name));
    let lock = path.to_string_lossy().to_string();
    fs::remove_file(&lock).ok();
    lock
}

/// Log file path the default configuration uses inside `dir`
pub fn log_path(dir: &str) -> String {
    PathBuf::from(dir)
        .join("time_log.csv")
        .to_string_lossy()
        .to_string()
}

/// Report file path the default configuration uses inside `dir`
pub fn report_path(dir: &str) -> String {
    PathBuf::from(dir)
        .join("time_report.txt")
        .to_string_lossy()
        .to_string()
}

/// Session state file path inside `dir`
pub fn session_path(dir: &str) -> String {
    PathBuf::from(dir)
        .join("session.yaml")
        .to_string_lossy()
        .to_string()
}

/// Write raw CSV content (header included) directly into the log file,
/// the same way a manual external edit would
pub fn seed_log(dir: &str, content: &str) {
    fs::create_dir_all(dir).expect("create data dir");
    fs::write(log_path(dir), content).expect("seed log file");
}

pub const LOG_HEADER: &str = "project_code,start_time,end_time,duration_seconds\n";
