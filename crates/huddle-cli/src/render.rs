//! Text and JSON renderings of a [`MeetingReport`].

use anyhow::{Context, Result};
use huddle_engine::MeetingReport;

pub const NO_OPTIONS: &str = "No meeting options available";

/// One line per window, best first:
/// `Monday    9:00 AM - 11:00 AM   2/3 available: Alice, Bob`
pub fn text(report: &MeetingReport) -> String {
    if report.is_empty() {
        return format!("{}\n", NO_OPTIONS);
    }

    report
        .windows
        .iter()
        .map(|window| {
            let everyone = if window.is_full_attendance(report.total_participants) {
                " (everyone)"
            } else {
                ""
            };
            format!(
                "{:<9} {:<19}  {}/{} available: {}{}\n",
                window.day,
                window.time_range(),
                window.available_count(),
                report.total_participants,
                window.participants.join(", "),
                everyone,
            )
        })
        .collect()
}

pub fn json(report: &MeetingReport) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    out.push('\n');
    Ok(out)
}
