//! Report aggregation and rendering.
//!
//! The report groups logged time by calendar date, then by project code
//! within each date, and sums durations. Both grouping levels live in
//! `BTreeMap`s: dates come out chronologically, projects alphabetically,
//! with no extra sort pass.

use crate::models::entry::TimeEntry;
use crate::utils::time::format_hms;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

const SEPARATOR_WIDTH: usize = 30;

/// Total seconds per project per date.
pub fn aggregate(entries: &[TimeEntry]) -> BTreeMap<NaiveDate, BTreeMap<String, f64>> {
    let mut totals: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();

    for entry in entries {
        let day = totals.entry(entry.date()).or_default();
        *day.entry(entry.project_code.clone()).or_insert(0.0) += entry.duration_seconds;
    }

    totals
}

/// Render the full report text, or `None` when there are no entries.
pub fn render(entries: &[TimeEntry], generated_at: NaiveDateTime) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    out.push_str("--- Time Tracking Report ---\n");
    out.push_str(&format!(
        "Generated on: {}\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));

    for (date, projects) in aggregate(entries) {
        out.push_str(&format!("\n{separator}\n"));
        out.push_str(&format!("DATE: {}\n", date.format("%Y-%m-%d")));
        out.push_str(&format!("{separator}\n"));

        for (project_code, seconds) in projects {
            out.push_str(&format!("  Project: {project_code}\n"));
            out.push_str(&format!(
                "    Total Time: {}\n\n",
                format_hms(seconds as i64)
            ));
        }
    }

    Some(out)
}
