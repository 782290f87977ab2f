//! Creates the sample employees database.
//!
//! Run with:
//! ```
//! cargo run -p sample-db --bin seed
//! ```
//!
//! `SAMPLE_DB_PATH` overrides the target file (default `db/employees.db`).

use sample_db::config::SeedConfig;
use sample_db::db::seed_database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let summary = seed_database(&config).await?;

    for line in summary.to_string().lines() {
        tracing::info!("{}", line);
    }

    Ok(())
}
