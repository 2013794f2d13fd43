use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Builds the pool backing the conversation, resume, and directory tables.
/// Pool size is a config knob (`DB_MAX_CONNECTIONS`).
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("Connecting to the Asha database")?;

    info!("Asha database pool ready ({max_connections} connections)");
    Ok(pool)
}
