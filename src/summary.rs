use std::collections::HashSet;

use chrono::NaiveDate;

use crate::dates::{in_range, DateRange};
use crate::models::{Observation, RiskClass, StatusClass};

/// Home-tab counts for the current calendar month. An observation whose
/// status matches neither bucket still counts toward the total, so the total
/// need not equal open + closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthSummary {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

pub fn observations_today(records: &[Observation], today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|obs| obs.date == Some(today))
        .count()
}

/// Distinct non-empty reporting groups among today's observations.
pub fn observers_today(records: &[Observation], today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|obs| obs.date == Some(today) && !obs.reporter.is_empty())
        .map(|obs| obs.reporter.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// High-RA observations not yet closed. "Not closed" means the status text
/// lacks "close", so an unclassifiable status still counts as open here.
pub fn high_risk_open_count(records: &[Observation]) -> usize {
    records
        .iter()
        .filter(|obs| obs.risk_class() == RiskClass::High)
        .filter(|obs| !obs.status.to_lowercase().contains("close"))
        .count()
}

pub fn month_summary(records: &[Observation], today: NaiveDate) -> MonthSummary {
    let mut summary = MonthSummary::default();
    for obs in records {
        if !in_range(obs.date, DateRange::Month, today) {
            continue;
        }
        summary.total += 1;
        match obs.status_class() {
            StatusClass::Open => summary.open += 1,
            StatusClass::Closed => summary.closed += 1,
            StatusClass::Other => {}
        }
    }
    summary
}
