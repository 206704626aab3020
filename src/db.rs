use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};

/// Connection options shared by every pool. Pragmas set here run on each new
/// connection, not just the first one handed out by the pool.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .pragma("temp_store", "memory"))
}

/// Read-only pool used by the listing endpoints and the readiness probe.
/// The write pool has already switched the file to WAL.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?.read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        "Created read-only pool with {} max connections",
        max_connections
    );

    Ok(pool)
}

/// Read-write pool limited to a single connection to avoid SQLITE_BUSY on writes
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let options = connect_options(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    tracing::info!("Created read-write pool with 1 max connection");

    Ok(pool)
}

/// Single pool for CLI commands
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}
