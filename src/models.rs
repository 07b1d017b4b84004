use chrono::NaiveDate;

use crate::dates::DateRange;

/// One safety-report record from the observations sheet. Text fields default
/// to empty when the column is missing or the cell is blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    pub code: String,
    pub day: String,
    pub group: String,
    pub date: Option<NaiveDate>,
    pub date_raw: String,
    pub obs_type: String,
    pub obs_class: String,
    pub obs_types: String,
    pub injury_flag: String,
    pub injury_type: String,
    pub description: String,
    /// Display name of whoever reported. The sheet has a name column but the
    /// board attributes observations to the group, so this is the group cell.
    pub reporter: String,
    pub id: String,
    pub position: String,
    pub direct_cause: String,
    pub root_cause: String,
    pub equipment: String,
    pub area: String,
    pub likelihood: String,
    pub severity: String,
    pub ra_rate: String,
    pub ra_level: String,
    pub status: String,
    pub gi_number: String,
    pub comments: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskClass {
    High,
    Medium,
    Low,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Open,
    Closed,
    Other,
}

impl Observation {
    /// Substring classification of the free-text RA level; first match wins.
    pub fn risk_class(&self) -> RiskClass {
        let level = self.ra_level.to_lowercase();
        if level.contains("high") {
            RiskClass::High
        } else if level.contains("medium") {
            RiskClass::Medium
        } else if level.contains("low") {
            RiskClass::Low
        } else {
            RiskClass::Neutral
        }
    }

    pub fn status_class(&self) -> StatusClass {
        let status = self.status.to_lowercase();
        if status.contains("open") || status.contains("progress") {
            StatusClass::Open
        } else if status.contains("close") {
            StatusClass::Closed
        } else {
            StatusClass::Other
        }
    }
}

/// One leaderboard row. Sheet order is rank order.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub points: String,
}

/// The first leaderboard data row names the current period's honoree.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeOfMonth {
    pub month: String,
    pub color: String,
    pub name: String,
    pub points: String,
}

pub const NO_DETAILS: &str = "No details.";

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub date: String,
    pub title: String,
    pub content: String,
}

impl NewsItem {
    /// Items with real content render expandable.
    pub fn expandable(&self) -> bool {
        self.content != NO_DETAILS
    }
}

/// Filter state for the observations view. Empty fields match everything and
/// all predicates combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ObservationFilter {
    pub range: DateRange,
    pub risk: String,
    pub status: String,
    pub search: String,
}
