use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Builds the shared Postgres pool. Acquisition is bounded so a saturated pool
/// fails the request instead of queueing callers indefinitely.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    Ok(pool)
}
