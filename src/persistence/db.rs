//! `SQLite` connection pool and schema bootstrap.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::Result;

use super::schema;

/// Alias for the shared `SQLite` pool.
pub type Database = SqlitePool;

/// Open the tracker database at `url` and apply the schema.
///
/// The file is created when missing. With `max_connections` at 1 every
/// transaction runs to completion before the next one starts.
///
/// # Errors
///
/// Returns `AppError::Db` if the URL is invalid, the connection fails, or
/// the schema cannot be applied.
pub async fn connect(url: &str, max_connections: u32) -> Result<Database> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    schema::bootstrap_schema(&pool).await?;
    info!(max_connections, "database pool ready");
    Ok(pool)
}

/// Open a private in-memory database with the schema applied.
///
/// Uses a single connection that never expires, since each new `SQLite`
/// memory connection would see an empty database.
///
/// # Errors
///
/// Returns `AppError::Db` if the connection or schema bootstrap fails.
pub async fn connect_memory() -> Result<Database> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    schema::bootstrap_schema(&pool).await?;
    Ok(pool)
}
