//! Recency index over the log: which projects were used last.

use crate::models::entry::TimeEntry;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Up to `limit` distinct project codes, ordered by most recent
/// `start_time` first.
///
/// Ranking pairs each project's latest start time with its position in the
/// file, so two projects started at the same second are ordered by which
/// entry appears later in the log.
pub fn most_recent_projects(entries: &[TimeEntry], limit: usize) -> Vec<String> {
    let mut latest: HashMap<&str, (NaiveDateTime, usize)> = HashMap::new();

    for (position, entry) in entries.iter().enumerate() {
        let candidate = (entry.start_time, position);
        let slot = latest.entry(entry.project_code.as_str()).or_insert(candidate);
        if candidate > *slot {
            *slot = candidate;
        }
    }

    let mut ranked: Vec<(&str, (NaiveDateTime, usize))> = latest.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(code, _)| code.to_string())
        .collect()
}
