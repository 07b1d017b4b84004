use anyhow::{bail, Context};

use crate::csv::parse_csv;
use crate::mappers;
use crate::models::{EmployeeOfMonth, LeaderboardEntry, NewsItem, Observation};

/// A fetched sheet split into its header row and data rows. Rows where every
/// cell is blank are already discarded.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One-shot GET of a published CSV. No retry, no backoff; a later tab open
/// issues its own fetch.
async fn fetch_rows(client: &reqwest::Client, url: &str) -> anyhow::Result<Vec<Vec<String>>> {
    let response = client
        .get(url)
        .send()
        .await
        .context("request failed")?;
    let status = response.status();
    if !status.is_success() {
        bail!("sheet returned HTTP {status}");
    }
    let text = response.text().await.context("failed to read body")?;
    Ok(parse_csv(&text))
}

pub async fn fetch_sheet(client: &reqwest::Client, url: &str) -> anyhow::Result<Sheet> {
    let rows = fetch_rows(client, url).await?;
    if rows.is_empty() {
        bail!("sheet is empty");
    }
    Ok(split_sheet(rows))
}

// First row is always the header; data rows that are entirely blank are
// dropped before mapping.
fn split_sheet(mut rows: Vec<Vec<String>>) -> Sheet {
    let headers = rows.remove(0);
    rows.retain(|row| row.iter().any(|cell| !cell.is_empty()));
    Sheet { headers, rows }
}

pub async fn load_observations(
    client: &reqwest::Client,
    url: &str,
) -> anyhow::Result<Vec<Observation>> {
    let sheet = fetch_sheet(client, url).await?;
    if sheet.rows.is_empty() {
        bail!("observations sheet has no data rows");
    }
    Ok(sheet
        .rows
        .iter()
        .map(|row| mappers::map_observation(&sheet.headers, row))
        .collect())
}

/// First data row is the current period's honoree; the rest (honoree
/// included) rank exactly in sheet order.
pub async fn load_leaderboard(
    client: &reqwest::Client,
    url: &str,
    default_color: &str,
) -> anyhow::Result<(EmployeeOfMonth, Vec<LeaderboardEntry>)> {
    let sheet = fetch_sheet(client, url).await?;
    if sheet.rows.is_empty() {
        bail!("leaderboard sheet has no data rows");
    }
    let honoree = mappers::map_employee_of_month(&sheet.headers, &sheet.rows[0], default_color);
    let entries = sheet
        .rows
        .iter()
        .map(|row| mappers::map_leaderboard_entry(&sheet.headers, row))
        .collect();
    Ok((honoree, entries))
}

/// A news sheet with no rows at all is not an error; it renders as
/// "no news found". Only HTTP failure is a load error here.
pub async fn load_news(client: &reqwest::Client, url: &str) -> anyhow::Result<Vec<NewsItem>> {
    Ok(news_items(fetch_rows(client, url).await?))
}

fn news_items(rows: Vec<Vec<String>>) -> Vec<NewsItem> {
    if rows.is_empty() {
        return Vec::new();
    }
    let sheet = split_sheet(rows);
    sheet
        .rows
        .iter()
        .map(|row| mappers::map_news_item(&sheet.headers, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_is_always_the_header() {
        let sheet = split_sheet(parse_csv("Date,Title\n01/01/2030,Hello\n"));
        assert_eq!(sheet.headers, vec!["Date", "Title"]);
        assert_eq!(sheet.rows.len(), 1);
    }

    #[test]
    fn all_blank_data_rows_are_discarded() {
        let sheet = split_sheet(parse_csv("Date,Title\n,\n01/01/2030,Hello\n"));
        assert_eq!(sheet.rows, vec![vec!["01/01/2030", "Hello"]]);
    }

    #[test]
    fn empty_news_sheet_is_no_news_rather_than_an_error() {
        assert!(news_items(parse_csv("")).is_empty());
        assert!(news_items(parse_csv("Date,Title,Content\n")).is_empty());
    }

    #[test]
    fn news_rows_map_in_sheet_order() {
        let items = news_items(parse_csv(
            "Date,Title,Content\n01/01/2030,First,Details\n02/01/2030,Second,\n",
        ));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "First");
        assert!(!items[1].expandable());
    }
}
