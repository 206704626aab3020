//! Database migration utilities

use sqlx::{Sqlite, migrate::MigrateDatabase};

use crate::Config;

/// Create the database if needed and apply the inquiry store migrations
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    if !Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        Sqlite::create_database(&config.database.url).await?;
    }

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    seaworth_inquiry::MIGRATOR.run(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database and run migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    if Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await
}
