use crate::columns::{cell, resolve};
use crate::dates::parse_date;
use crate::models::{EmployeeOfMonth, LeaderboardEntry, NewsItem, Observation, NO_DETAILS};

// Candidate header names per field, in priority order. Exact names first so
// e.g. "Status" never steals a match from "Report Status".
const CODE: &[&str] = &["code"];
const DATE: &[&str] = &["date"];
const DAY: &[&str] = &["day"];
const GROUP: &[&str] = &["group #", "group"];
const OBS_TYPE: &[&str] = &["activity type", "type"];
const OBS_CLASS: &[&str] = &["observation class", "class"];
const OBS_TYPES: &[&str] = &["observation types"];
const INJURY_FLAG: &[&str] = &["injury / no injury", "injury/no injury", "injury"];
const INJURY_TYPE: &[&str] = &["type of injury", "injury type"];
const DESCRIPTION: &[&str] = &["description"];
const ID: &[&str] = &["id"];
const POSITION: &[&str] = &["position"];
const DIRECT_CAUSE: &[&str] = &["direct cause"];
const ROOT_CAUSE: &[&str] = &["root cause"];
const EQUIPMENT: &[&str] = &["equipment/tool", "equipment", "tool"];
const AREA: &[&str] = &["area/location", "area", "location"];
const LIKELIHOOD: &[&str] = &["likelihood"];
const SEVERITY: &[&str] = &["severity"];
const RA_RATE: &[&str] = &["ra rate"];
const RA_LEVEL: &[&str] = &["ra level", "risk level"];
const STATUS: &[&str] = &["report status", "status"];
const GI_NUMBER: &[&str] = &["gi number"];
const COMMENTS: &[&str] = &["comments"];

const LB_MONTH: &[&str] = &["month", "period"];
const LB_COLOR: &[&str] = &["color", "color code", "colour"];
const LB_NAME: &[&str] = &["employee", "name"];
const LB_POINTS: &[&str] = &["points", "score"];

const NEWS_DATE: &[&str] = &["date"];
const NEWS_TITLE: &[&str] = &["title", "subject"];
const NEWS_CONTENT: &[&str] = &["description", "content", "details", "body"];

/// Map one data row of the observations sheet. Missing columns and blank
/// cells become empty strings; an unparseable date keeps the raw text and a
/// `None` date. Mapping never fails on a partial sheet.
pub fn map_observation(headers: &[String], row: &[String]) -> Observation {
    let date_raw = cell(row, resolve(headers, DATE));
    let group = cell(row, resolve(headers, GROUP));

    Observation {
        code: cell(row, resolve(headers, CODE)),
        day: cell(row, resolve(headers, DAY)),
        date: parse_date(&date_raw),
        date_raw,
        obs_type: cell(row, resolve(headers, OBS_TYPE)),
        obs_class: cell(row, resolve(headers, OBS_CLASS)),
        obs_types: cell(row, resolve(headers, OBS_TYPES)),
        injury_flag: cell(row, resolve(headers, INJURY_FLAG)),
        injury_type: cell(row, resolve(headers, INJURY_TYPE)),
        description: cell(row, resolve(headers, DESCRIPTION)),
        reporter: group.clone(),
        group,
        id: cell(row, resolve(headers, ID)),
        position: cell(row, resolve(headers, POSITION)),
        direct_cause: cell(row, resolve(headers, DIRECT_CAUSE)),
        root_cause: cell(row, resolve(headers, ROOT_CAUSE)),
        equipment: cell(row, resolve(headers, EQUIPMENT)),
        area: cell(row, resolve(headers, AREA)),
        likelihood: cell(row, resolve(headers, LIKELIHOOD)),
        severity: cell(row, resolve(headers, SEVERITY)),
        ra_rate: cell(row, resolve(headers, RA_RATE)),
        ra_level: cell(row, resolve(headers, RA_LEVEL)),
        status: cell(row, resolve(headers, STATUS)),
        gi_number: cell(row, resolve(headers, GI_NUMBER)),
        comments: cell(row, resolve(headers, COMMENTS)),
    }
}

pub fn map_leaderboard_entry(headers: &[String], row: &[String]) -> LeaderboardEntry {
    LeaderboardEntry {
        name: cell(row, resolve(headers, LB_NAME)),
        points: cell(row, resolve(headers, LB_POINTS)),
    }
}

/// The honoree row also carries the period and color code; a blank color
/// falls back to the configured default.
pub fn map_employee_of_month(
    headers: &[String],
    row: &[String],
    default_color: &str,
) -> EmployeeOfMonth {
    let color = cell(row, resolve(headers, LB_COLOR));
    EmployeeOfMonth {
        month: cell(row, resolve(headers, LB_MONTH)),
        color: if color.is_empty() {
            default_color.to_string()
        } else {
            color
        },
        name: cell(row, resolve(headers, LB_NAME)),
        points: cell(row, resolve(headers, LB_POINTS)),
    }
}

pub fn map_news_item(headers: &[String], row: &[String]) -> NewsItem {
    let title = cell(row, resolve(headers, NEWS_TITLE));
    let content = cell(row, resolve(headers, NEWS_CONTENT));
    NewsItem {
        date: cell(row, resolve(headers, NEWS_DATE)),
        title: if title.is_empty() {
            "No Title".to_string()
        } else {
            title
        },
        content: if content.is_empty() {
            NO_DETAILS.to_string()
        } else {
            content
        },
    }
}
