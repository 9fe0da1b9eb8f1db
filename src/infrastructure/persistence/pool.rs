//! SQLite connection pool construction.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Opens the connection pool described by `config`.
///
/// The database file is created if it does not exist. Foreign key enforcement
/// follows `DB_FOREIGN_KEYS`; SQLx would otherwise switch it on for every
/// connection.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the first connection fails.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(config.db_foreign_keys);

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
}
