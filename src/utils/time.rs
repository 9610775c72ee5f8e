//! Timestamp helpers shared by the log store, the session state and the
//! report renderer.

use chrono::{Local, NaiveDateTime, Timelike};

/// Timestamp layout used everywhere a time is persisted or displayed.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, truncated to whole seconds.
///
/// Persisted timestamps carry second precision only, so truncating at the
/// source keeps in-memory values identical to what a reload would produce.
pub fn now_second() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Format a timestamp using [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`], or `None` if it doesn't match.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}

/// Render a number of seconds as zero-padded `HH:MM:SS`.
///
/// The hour field is not capped at 24: a total of 30 hours renders as
/// `30:00:00`.
pub fn format_hms(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
