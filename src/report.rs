use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{EmployeeOfMonth, LeaderboardEntry, NewsItem, Observation};
use crate::summary::{self, MonthSummary};

/// How many leaderboard rows each view shows.
pub const LEADERBOARD_MINI: usize = 3;
pub const LEADERBOARD_FULL: usize = 50;

pub fn render_home_summary(records: &[Observation], today: NaiveDate) -> String {
    let MonthSummary { total, open, closed } = summary::month_summary(records, today);

    let mut output = String::new();
    let _ = writeln!(output, "# Site Safety Board: {today}");
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Observations today: {}",
        summary::observations_today(records, today)
    );
    let _ = writeln!(
        output,
        "Groups reporting today: {}",
        summary::observers_today(records, today)
    );
    let _ = writeln!(
        output,
        "Open high-risk items: {}",
        summary::high_risk_open_count(records)
    );
    let _ = writeln!(
        output,
        "This month: {total} total, {open} open, {closed} closed"
    );
    output
}

pub fn render_observations(observations: &[&Observation], limit: usize) -> String {
    let mut output = String::new();
    if observations.is_empty() {
        let _ = writeln!(output, "No observations match the current filters.");
        return output;
    }

    for obs in observations.iter().take(limit) {
        let date = match obs.date {
            Some(date) => date.to_string(),
            // Unparseable dates still display as the sheet wrote them.
            None if !obs.date_raw.is_empty() => obs.date_raw.clone(),
            None => "undated".to_string(),
        };
        let _ = writeln!(
            output,
            "- [{date}] {} | {} | {} | RA {} | {}",
            or_dash(&obs.code),
            or_dash(&obs.area),
            or_dash(&obs.obs_type),
            or_dash(&obs.ra_level),
            or_dash(&obs.status)
        );
        if !obs.description.is_empty() {
            let _ = writeln!(output, "  {}", obs.description);
        }
        if !obs.reporter.is_empty() {
            let _ = writeln!(output, "  reported by {}", obs.reporter);
        }
    }
    if observations.len() > limit {
        let _ = writeln!(output, "... and {} more", observations.len() - limit);
    }
    output
}

pub fn render_leaderboard(
    honoree: &EmployeeOfMonth,
    entries: &[LeaderboardEntry],
    limit: usize,
) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Employee of the month ({}, color {}): {}",
        or_dash(&honoree.month),
        honoree.color,
        or_dash(&honoree.name)
    );
    let _ = writeln!(output);

    // Sheet order is rank order; never re-sort.
    for (rank, entry) in entries.iter().take(limit).enumerate() {
        let _ = writeln!(
            output,
            "{:>2}. {} - {}",
            rank + 1,
            or_dash(&entry.name),
            or_dash(&entry.points)
        );
    }
    output
}

pub fn render_news(items: &[NewsItem]) -> String {
    let mut output = String::new();
    if items.is_empty() {
        let _ = writeln!(output, "No news found.");
        return output;
    }
    for item in items {
        let _ = writeln!(output, "- {} {}", item.date, item.title);
        if item.expandable() {
            let _ = writeln!(output, "  {}", item.content);
        }
    }
    output
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "--"
    } else {
        value
    }
}
