use anyhow::Context;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

/// Schema migrations, embedded into the binary from the `migrations` directory
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Connects to PostgreSQL with a bounded pool and brings the schema up to date
pub async fn connect_sqlx(db_url: &str) -> Result<PgPool, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(2))
        .connect(db_url)
        .await
        .context("connecting to the database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("applying database migrations")?;
    info!("Database connection established and schema is up to date");

    Ok(pool)
}
