use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::warn;

mod columns;
mod config;
mod csv;
mod dates;
mod fetch;
mod mappers;
mod models;
mod prefs;
mod report;
mod store;
mod summary;
mod tools;

use config::Config;
use dates::DateRange;
use models::ObservationFilter;
use store::ObservationStore;

#[derive(Parser)]
#[command(name = "safety-board")]
#[command(about = "Site safety observation board fed by published spreadsheet CSVs", long_about = None)]
struct Cli {
    /// JSON config file with the sheet URLs (env vars override)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Prefs file holding the dark-mode flag
    #[arg(long, default_value = "safety-board-prefs.json")]
    prefs: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Home-tab summary across all three sheets
    Summary,
    /// Filtered observation list
    Observations {
        #[arg(long, value_enum, default_value_t = DateRange::Today)]
        range: DateRange,
        /// Substring match against the RA level
        #[arg(long, default_value = "")]
        risk: String,
        /// Substring match against the report status
        #[arg(long, default_value = "")]
        status: String,
        /// Substring match across area, type, class, group and description
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Leaderboard and employee of the month
    Leaderboard {
        /// Rows to show from the full view
        #[arg(long, default_value_t = report::LEADERBOARD_FULL)]
        limit: usize,
        /// Show only the top-3 mini view
        #[arg(long)]
        top3: bool,
    },
    /// News and announcements
    News,
    /// Classify a wind speed in km/h
    Wind {
        #[arg(long)]
        speed: f64,
    },
    /// Classify heat stress from temperature (C) and relative humidity (%)
    Heat {
        #[arg(long)]
        temp: f64,
        #[arg(long)]
        humidity: f64,
    },
    /// Show or set the persisted dark-mode flag
    DarkMode {
        #[arg(value_parser = ["on", "off"])]
        state: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let client = reqwest::Client::new();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Summary => run_summary(&client, &config, today).await,
        Commands::Observations {
            range,
            risk,
            status,
            search,
            limit,
        } => {
            let filter = ObservationFilter {
                range,
                risk,
                status,
                search,
            };
            run_observations(&client, &config, &filter, limit, today).await;
        }
        Commands::Leaderboard { limit, top3 } => {
            let limit = if top3 {
                report::LEADERBOARD_MINI
            } else {
                limit
            };
            run_leaderboard(&client, &config, limit).await;
        }
        Commands::News => run_news(&client, &config).await,
        Commands::Wind { speed } => {
            let risk = tools::classify_wind(speed);
            println!("{speed} km/h: {}", risk.label());
        }
        Commands::Heat { temp, humidity } => {
            let risk = tools::classify_heat(temp, humidity);
            println!("{temp} C / {humidity}%: {}", risk.label());
            println!("{}", risk.recommendation());
        }
        Commands::DarkMode { state } => match state.as_deref() {
            Some(state) => {
                prefs::set_dark_mode(&cli.prefs, state == "on")?;
                println!("Dark mode {state}.");
            }
            None => {
                let on = prefs::dark_mode(&cli.prefs);
                println!("Dark mode is {}.", if on { "on" } else { "off" });
            }
        },
    }

    Ok(())
}

// Each region of the summary loads and renders independently: one failing
// sheet leaves the other sections intact, matching the board's behavior.
async fn run_summary(client: &reqwest::Client, config: &Config, today: NaiveDate) {
    let observations = async {
        match &config.observations_url {
            None => None,
            Some(url) => Some(fetch::load_observations(client, url).await),
        }
    };
    let leaderboard = async {
        match &config.leaderboard_url {
            None => None,
            Some(url) => Some(fetch::load_leaderboard(client, url, config.month_color()).await),
        }
    };
    let news = async {
        match &config.news_url {
            None => None,
            Some(url) => Some(fetch::load_news(client, url).await),
        }
    };
    let (observations, leaderboard, news) = tokio::join!(observations, leaderboard, news);

    match observations {
        None => println!("Observations sheet not configured."),
        Some(Err(err)) => {
            warn!(error = %err, "observations load failed");
            println!("Error loading observations.");
        }
        Some(Ok(records)) => {
            let mut store = ObservationStore::new();
            store.load(records);
            print!("{}", report::render_home_summary(store.records(), today));
        }
    }

    println!();
    match leaderboard {
        None => println!("Leaderboard sheet not configured."),
        Some(Err(err)) => {
            warn!(error = %err, "leaderboard load failed");
            println!("Error loading leaderboard.");
        }
        Some(Ok((honoree, entries))) => {
            print!(
                "{}",
                report::render_leaderboard(&honoree, &entries, report::LEADERBOARD_MINI)
            );
        }
    }

    println!();
    match news {
        None => println!("News sheet not configured."),
        Some(Err(err)) => {
            warn!(error = %err, "news load failed");
            println!("Error loading news.");
        }
        Some(Ok(items)) => print!("{}", report::render_news(&items)),
    }
}

async fn run_observations(
    client: &reqwest::Client,
    config: &Config,
    filter: &ObservationFilter,
    limit: usize,
    today: NaiveDate,
) {
    let Some(url) = &config.observations_url else {
        println!("Observations sheet not configured.");
        return;
    };
    match fetch::load_observations(client, url).await {
        Err(err) => {
            warn!(error = %err, "observations load failed");
            println!("Error loading observations.");
        }
        Ok(records) => {
            let mut store = ObservationStore::new();
            store.load(records);
            let hits = store.filter(filter, today);
            print!("{}", report::render_observations(&hits, limit));
        }
    }
}

async fn run_leaderboard(client: &reqwest::Client, config: &Config, limit: usize) {
    let Some(url) = &config.leaderboard_url else {
        println!("Leaderboard sheet not configured.");
        return;
    };
    match fetch::load_leaderboard(client, url, config.month_color()).await {
        Err(err) => {
            warn!(error = %err, "leaderboard load failed");
            println!("Error loading leaderboard.");
        }
        Ok((honoree, entries)) => {
            print!("{}", report::render_leaderboard(&honoree, &entries, limit));
        }
    }
}

async fn run_news(client: &reqwest::Client, config: &Config) {
    let Some(url) = &config.news_url else {
        println!("News sheet not configured.");
        return;
    };
    match fetch::load_news(client, url).await {
        Err(err) => {
            warn!(error = %err, "news load failed");
            println!("Error loading news.");
        }
        Ok(items) => print!("{}", report::render_news(&items)),
    }
}
