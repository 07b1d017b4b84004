use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

// Unambiguous formats tried before the day/month/year fallback.
const GENERIC_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%B %d, %Y"];

/// Parse the heterogeneous date strings the sheets contain.
///
/// ISO-like and written dates parse directly. Anything else is split on `/`
/// or `-` and read as day/month/4-digit-year, which is how the site fills
/// the sheet. Unparseable input is `None`; the caller keeps the raw string
/// for display and the record never matches a date-range filter.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in GENERIC_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    let parts: Vec<&str> = raw.split(['/', '-']).map(str::trim).collect();
    if parts.len() == 3 && parts[2].len() == 4 && parts[2].chars().all(|c| c.is_ascii_digit()) {
        let day: u32 = parts[0].parse().ok()?;
        let month: u32 = parts[1].parse().ok()?;
        let year: i32 = parts[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DateRange {
    #[default]
    Today,
    Week,
    Month,
    All,
}

/// Whether a record date falls in the requested window relative to `today`.
/// Undated records only pass `All`; there is nothing to compare.
pub fn in_range(date: Option<NaiveDate>, range: DateRange, today: NaiveDate) -> bool {
    if range == DateRange::All {
        return true;
    }
    let Some(date) = date else {
        return false;
    };
    match range {
        DateRange::Today => date == today,
        DateRange::Week => (today - date).num_days().abs() <= 7,
        DateRange::Month => date.year() == today.year() && date.month() == today.month(),
        DateRange::All => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-03-05"), Some(d(2024, 3, 5)));
    }

    #[test]
    fn generic_pass_handles_slashed_iso_and_written_dates() {
        assert_eq!(parse_date("2024/03/05"), Some(d(2024, 3, 5)));
        assert_eq!(parse_date("5 March 2024"), Some(d(2024, 3, 5)));
        assert_eq!(parse_date("March 5, 2024"), Some(d(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05T10:30:00Z"), Some(d(2024, 3, 5)));
    }

    #[test]
    fn falls_back_to_day_month_year_with_dashes() {
        assert_eq!(parse_date("05-03-2024"), Some(d(2024, 3, 5)));
    }

    #[test]
    fn falls_back_to_day_month_year_with_slashes() {
        assert_eq!(parse_date("01/01/2030"), Some(d(2030, 1, 1)));
    }

    #[test]
    fn rejects_two_digit_years_and_garbage() {
        assert_eq!(parse_date("05/03/24"), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn rejects_out_of_range_day_month() {
        assert_eq!(parse_date("32/01/2024"), None);
        assert_eq!(parse_date("01/13/2024"), None);
    }

    #[test]
    fn today_matches_only_the_same_day() {
        let today = d(2030, 1, 15);
        assert!(in_range(Some(today), DateRange::Today, today));
        assert!(!in_range(Some(d(2030, 1, 14)), DateRange::Today, today));
    }

    #[test]
    fn week_is_a_seven_day_absolute_window() {
        let today = d(2030, 1, 15);
        assert!(in_range(Some(d(2030, 1, 8)), DateRange::Week, today));
        assert!(in_range(Some(d(2030, 1, 22)), DateRange::Week, today));
        assert!(!in_range(Some(d(2030, 1, 7)), DateRange::Week, today));
    }

    #[test]
    fn month_matches_calendar_month_and_year() {
        let today = d(2030, 1, 15);
        assert!(in_range(Some(d(2030, 1, 1)), DateRange::Month, today));
        assert!(!in_range(Some(d(2029, 1, 15)), DateRange::Month, today));
        assert!(!in_range(Some(d(2030, 2, 1)), DateRange::Month, today));
    }

    #[test]
    fn undated_records_pass_only_all() {
        let today = d(2030, 1, 15);
        assert!(!in_range(None, DateRange::Today, today));
        assert!(!in_range(None, DateRange::Week, today));
        assert!(!in_range(None, DateRange::Month, today));
        assert!(in_range(None, DateRange::All, today));
    }
}
