//! Reset the database: drop, recreate, and seed the schema from `sql/`.

use anyhow::Context;
use tokio::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lineup_back::{config::AppConfig, dao::postgres};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;
    let pool = postgres::connect(&config)
        .await
        .context("connecting to PostgreSQL")?;

    for file in ["sql/drop.sql", "sql/schema.sql", "sql/insert.sql"] {
        let contents = fs::read_to_string(file)
            .await
            .with_context(|| format!("reading {file}"))?;
        sqlx::raw_sql(&contents)
            .execute(&pool)
            .await
            .with_context(|| format!("executing {file}"))?;
        info!(file, "applied");
    }

    pool.close().await;
    Ok(())
}
