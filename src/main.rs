mod cli;
mod database;
mod services;

use anyhow::Context;
use cli::cli;
use database::HistoryStore;
use services::market_data::rates::RateClient;
use services::shared::env::{ensure_required_env, get_env_variable};
use services::shared::logger::init_logger;

const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com/v6/";
const DEFAULT_HISTORY_LIMIT: i64 = 10;

async fn run_fxbook() -> anyhow::Result<()> {
    init_logger();
    ensure_required_env()?;

    let postgres_url = get_env_variable("POSTGRES_URL").context("POSTGRES_URL is not set")?;
    let mut store = HistoryStore::connect(&postgres_url)
        .await
        .context("could not open the conversion history store")?;
    store
        .run_migrations()
        .await
        .context("could not prepare the conversions table")?;

    let api_key = get_env_variable("API_KEY").context("API_KEY is not set")?;
    let api_url = get_env_variable("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let rates = RateClient::new(api_url, api_key);

    let history_limit = match get_env_variable("HISTORY_LIMIT") {
        Some(raw) => raw
            .parse()
            .context("HISTORY_LIMIT must be a whole number")?,
        None => DEFAULT_HISTORY_LIMIT,
    };
    anyhow::ensure!(history_limit > 0, "HISTORY_LIMIT must be positive");

    cli(&store, &rates, history_limit).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    run_fxbook().await?;
    Ok(())
}
