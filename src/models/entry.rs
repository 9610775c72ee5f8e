use crate::errors::{AppError, AppResult};
use crate::utils::time::format_timestamp;
use chrono::{NaiveDate, NaiveDateTime};

/// One completed work interval, exactly as persisted in the log file.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub project_code: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Seconds between start and end. Derived once when the interval is
    /// closed, then treated as stored data and never recomputed.
    pub duration_seconds: f64,
}

impl TimeEntry {
    /// Build an entry from a finished interval.
    ///
    /// Rejects empty project codes and intervals that end before they
    /// start, so nothing malformed ever reaches the log.
    pub fn from_interval(
        project_code: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> AppResult<Self> {
        let code = project_code.trim();
        if code.is_empty() {
            return Err(AppError::InvalidProject(
                "project code must not be empty".to_string(),
            ));
        }

        if end_time < start_time {
            return Err(AppError::InvalidInterval(format!(
                "end time {} is before start time {}",
                format_timestamp(&end_time),
                format_timestamp(&start_time)
            )));
        }

        let duration_seconds = (end_time - start_time).num_seconds() as f64;

        Ok(Self {
            project_code: code.to_string(),
            start_time,
            end_time,
            duration_seconds,
        })
    }

    /// Calendar date the entry belongs to. Intervals crossing midnight
    /// count entirely toward the day they started on.
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }
}
