use crate::{DbError, MIGRATOR, Result, StoreOptions};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// Open a connection pool for the given database file, creating the file
/// and its parent directory when missing.
pub async fn connect(options: &StoreOptions) -> Result<SqlitePool> {
    if let Some(parent) = options.path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::StorageUnavailable {
                message: format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let connect_options = SqliteConnectOptions::new()
        .filename(&options.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(options.busy_timeout);

    debug!(
        "Opening database {} (max {} connections)",
        options.path.display(),
        options.max_connections
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.acquire_timeout)
        .connect_with(connect_options)
        .await?;

    info!("Database connection established: {}", options.path.display());

    Ok(pool)
}

/// Bring the schema up to date. Safe to call on every start-up.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    info!("Migrations complete");

    Ok(())
}
