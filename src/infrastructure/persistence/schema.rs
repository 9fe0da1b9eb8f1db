//! Schema management: migrations and the start-up reset.

use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};

/// Migrations embedded from `./migrations` at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Resource tables, children before parents.
pub const TABLES: [&str; 6] = [
    "statistics",
    "payments",
    "products",
    "users",
    "stores",
    "brands",
];

/// Applies pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails or was modified after being applied.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Drops every table (including migration bookkeeping) and recreates the schema.
///
/// All stored records are lost.
///
/// # Errors
///
/// Returns an error if a `DROP` statement or the migrations fail.
pub async fn reset(pool: &SqlitePool) -> Result<(), MigrateError> {
    for table in TABLES.iter().chain(std::iter::once(&"_sqlx_migrations")) {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(pool)
            .await?;
    }

    tracing::info!("Dropped all tables");
    migrate(pool).await
}

/// Returns `(table, row count)` for every resource table.
///
/// # Errors
///
/// Returns an error if a table is missing or the query fails.
pub async fn table_counts(pool: &SqlitePool) -> Result<Vec<(&'static str, i64)>, sqlx::Error> {
    let mut counts = Vec::with_capacity(TABLES.len());

    for table in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;
        counts.push((table, count));
    }

    Ok(counts)
}
