//! Append-only CSV log store.
//!
//! The CSV file is the only durable copy of logged time. Writes go through
//! [`LogStore::append`], which adds exactly one row and never rewrites or
//! reorders what is already there. Reads always scan the whole file, so the
//! in-memory view cannot drift from the file contents, including rows added
//! by hand in an external editor.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::utils::time::{format_timestamp, parse_timestamp};
use csv::StringRecord;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Column order of the log file header.
const FIELDS: [&str; 4] = ["project_code", "start_time", "end_time", "duration_seconds"];

pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the log file with only the header row. Does nothing when the
    /// file already exists, whatever its contents.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        self.create_parent_dir()?;
        let mut writer = csv::Writer::from_writer(File::create(&self.path)?);
        writer.write_record(FIELDS)?;
        writer.flush()?;
        Ok(())
    }

    /// Append a single entry, writing the header first if the file is
    /// missing. The write is flushed before returning.
    pub fn append(&self, entry: &TimeEntry) -> AppResult<()> {
        let needs_header = !self.path.exists();
        if needs_header {
            self.create_parent_dir()?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);

        if needs_header {
            writer.write_record(FIELDS)?;
        }

        let start = format_timestamp(&entry.start_time);
        let end = format_timestamp(&entry.end_time);
        let duration = entry.duration_seconds.to_string();
        writer.write_record([entry.project_code.as_str(), start.as_str(), end.as_str(), duration.as_str()])?;
        writer.flush()?;
        Ok(())
    }

    /// Read every entry in file order.
    ///
    /// A missing or header-only file yields an empty list. A row that cannot
    /// be parsed fails the whole read with [`AppError::CorruptLog`] naming
    /// the offending row; silently dropping records would make totals lie.
    pub fn read_all(&self) -> AppResult<Vec<TimeEntry>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut entries = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let row = idx + 1;
            let record =
                record.map_err(|e| AppError::CorruptLog(format!("data row {row}: {e}")))?;
            entries.push(parse_record(&record, row)?);
        }
        Ok(entries)
    }

    /// True when the file is missing, zero-length or header-only.
    pub fn is_empty(&self) -> AppResult<bool> {
        if !self.path.exists() {
            return Ok(true);
        }
        if fs::metadata(&self.path)?.len() == 0 {
            return Ok(true);
        }
        let mut reader = csv::Reader::from_reader(File::open(&self.path)?);
        Ok(reader.records().next().is_none())
    }

    fn create_parent_dir(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

fn field<'r>(record: &'r StringRecord, row: usize, index: usize, name: &str) -> AppResult<&'r str> {
    record
        .get(index)
        .ok_or_else(|| AppError::CorruptLog(format!("data row {row}: missing field '{name}'")))
}

fn parse_record(record: &StringRecord, row: usize) -> AppResult<TimeEntry> {
    let project_code = field(record, row, 0, "project_code")?.trim();
    if project_code.is_empty() {
        return Err(AppError::CorruptLog(format!(
            "data row {row}: empty project_code"
        )));
    }

    let start_raw = field(record, row, 1, "start_time")?;
    let start_time = parse_timestamp(start_raw).ok_or_else(|| {
        AppError::CorruptLog(format!("data row {row}: invalid start_time '{start_raw}'"))
    })?;

    let end_raw = field(record, row, 2, "end_time")?;
    let end_time = parse_timestamp(end_raw).ok_or_else(|| {
        AppError::CorruptLog(format!("data row {row}: invalid end_time '{end_raw}'"))
    })?;

    let duration_raw = field(record, row, 3, "duration_seconds")?;
    let duration_seconds: f64 = duration_raw.trim().parse().map_err(|_| {
        AppError::CorruptLog(format!(
            "data row {row}: invalid duration_seconds '{duration_raw}'"
        ))
    })?;

    // The duration is stored data: read it back as written instead of
    // re-deriving it from the timestamps.
    Ok(TimeEntry {
        project_code: project_code.to_string(),
        start_time,
        end_time,
        duration_seconds,
    })
}
