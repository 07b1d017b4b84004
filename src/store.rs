use chrono::NaiveDate;

use crate::dates::in_range;
use crate::models::{Observation, ObservationFilter};

/// Owns the full loaded observation set. A fetch replaces the contents
/// wholesale; records have no identity across loads beyond their position.
#[derive(Debug, Default)]
pub struct ObservationStore {
    records: Vec<Observation>,
}

impl ObservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full contents. The old list is discarded, never merged.
    pub fn load(&mut self, records: Vec<Observation>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Range, risk, status and search predicates ANDed together. `today`
    /// anchors the date window so callers (and tests) control the clock.
    pub fn filter(&self, filter: &ObservationFilter, today: NaiveDate) -> Vec<&Observation> {
        let risk = filter.risk.to_lowercase();
        let status = filter.status.to_lowercase();
        let search = filter.search.to_lowercase();

        self.records
            .iter()
            .filter(|obs| in_range(obs.date, filter.range, today))
            .filter(|obs| risk.is_empty() || obs.ra_level.to_lowercase().contains(&risk))
            .filter(|obs| status.is_empty() || obs.status.to_lowercase().contains(&status))
            .filter(|obs| search.is_empty() || matches_search(obs, &search))
            .collect()
    }
}

// Search hits if ANY of the display fields contains the query.
fn matches_search(obs: &Observation, needle: &str) -> bool {
    [
        &obs.area,
        &obs.obs_type,
        &obs.obs_class,
        &obs.reporter,
        &obs.description,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::DateRange;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn obs(date: Option<NaiveDate>, ra_level: &str, status: &str) -> Observation {
        Observation {
            date,
            ra_level: ra_level.to_string(),
            status: status.to_string(),
            ..Observation::default()
        }
    }

    #[test]
    fn today_range_keeps_only_todays_records() {
        let today = d(2030, 1, 15);
        let mut store = ObservationStore::new();
        store.load(vec![
            obs(Some(today), "High", "Open"),
            obs(Some(d(2030, 1, 14)), "High", "Open"),
        ]);

        let filter = ObservationFilter {
            range: DateRange::Today,
            ..ObservationFilter::default()
        };
        let hits = store.filter(&filter, today);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date, Some(today));
    }

    #[test]
    fn undated_records_appear_only_under_all() {
        let today = d(2030, 1, 15);
        let mut store = ObservationStore::new();
        store.load(vec![obs(None, "High", "Open")]);

        for range in [DateRange::Today, DateRange::Week, DateRange::Month] {
            let filter = ObservationFilter {
                range,
                ..ObservationFilter::default()
            };
            assert!(store.filter(&filter, today).is_empty());
        }
        let all = ObservationFilter {
            range: DateRange::All,
            ..ObservationFilter::default()
        };
        assert_eq!(store.filter(&all, today).len(), 1);
    }

    #[test]
    fn risk_and_status_filters_compose_with_and() {
        let today = d(2030, 1, 15);
        let mut store = ObservationStore::new();
        store.load(vec![
            obs(Some(today), "High", "Open"),
            obs(Some(today), "High", "Closed"),
            obs(Some(today), "Low", "Open"),
        ]);

        let filter = ObservationFilter {
            range: DateRange::All,
            risk: "high".to_string(),
            status: "open".to_string(),
            ..ObservationFilter::default()
        };
        let hits = store.filter(&filter, today);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].status, "Open");
    }

    #[test]
    fn search_matches_any_of_the_display_fields() {
        let today = d(2030, 1, 15);
        let mut store = ObservationStore::new();
        let mut a = obs(Some(today), "", "");
        a.area = "Substation yard".to_string();
        let mut b = obs(Some(today), "", "");
        b.description = "Yardstick left on walkway".to_string();
        let mut c = obs(Some(today), "", "");
        c.reporter = "Crew 2".to_string();
        store.load(vec![a, b, c]);

        let filter = ObservationFilter {
            range: DateRange::All,
            search: "yard".to_string(),
            ..ObservationFilter::default()
        };
        assert_eq!(store.filter(&filter, today).len(), 2);
    }

    #[test]
    fn empty_filter_fields_match_everything() {
        let today = d(2030, 1, 15);
        let mut store = ObservationStore::new();
        store.load(vec![obs(Some(today), "High", "Open"), obs(None, "", "")]);

        let filter = ObservationFilter {
            range: DateRange::All,
            ..ObservationFilter::default()
        };
        assert_eq!(store.filter(&filter, today).len(), 2);
    }

    #[test]
    fn reload_replaces_contents_without_accumulation() {
        let today = d(2030, 1, 15);
        let records = vec![obs(Some(today), "High", "Open"), obs(None, "Low", "Closed")];
        let mut store = ObservationStore::new();
        store.load(records.clone());
        let first: Vec<Observation> = store.records().to_vec();
        store.load(records);
        assert_eq!(store.records(), first.as_slice());
        assert_eq!(store.len(), 2);
    }
}
