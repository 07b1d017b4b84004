use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Sheet endpoints and display defaults. Every URL is optional: an absent
/// URL is a valid "not configured" state that renders a placeholder, not an
/// error. Values come from an optional JSON file, then env vars override.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub observations_url: Option<String>,
    pub leaderboard_url: Option<String>,
    pub news_url: Option<String>,
    pub default_month_color: Option<String>,
}

const DEFAULT_MONTH_COLOR: &str = "White";

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    // Same variable names the site uses for its sheet endpoints.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("OBSERVATIONS_SHEET_CSV_URL") {
            self.observations_url = Some(url);
        }
        if let Ok(url) = std::env::var("EOM_SHEET_URL") {
            self.leaderboard_url = Some(url);
        }
        if let Ok(url) = std::env::var("NEWS_SHEET_CSV_URL") {
            self.news_url = Some(url);
        }
    }

    pub fn month_color(&self) -> &str {
        self.default_month_color
            .as_deref()
            .unwrap_or(DEFAULT_MONTH_COLOR)
    }
}
