#![allow(dead_code)]

use axum_test::TestServer;
use shop_catalog::infrastructure::persistence::schema;
use shop_catalog::routes;
use shop_catalog::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

/// In-memory database with the schema applied and foreign keys off.
pub async fn test_pool() -> SqlitePool {
    pool_with(false).await
}

/// In-memory database with foreign key enforcement.
pub async fn test_pool_with_foreign_keys() -> SqlitePool {
    pool_with(true).await
}

async fn pool_with(foreign_keys: bool) -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(foreign_keys);

    // A single connection that never expires: every in-memory connection is
    // its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    schema::migrate(&pool).await.unwrap();
    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: SqlitePool) -> TestServer {
    TestServer::new(routes::router(create_test_state(pool))).unwrap()
}

pub async fn create_test_user(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash) VALUES (?1, ?2, 'hash') RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_store(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO stores (name) VALUES (?1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_brand(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO brands (name) VALUES (?1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_product(
    pool: &SqlitePool,
    name: &str,
    store_id: i64,
    brand_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products (name, price, store_id, brand_id) VALUES (?1, 9.99, ?2, ?3) RETURNING id",
    )
    .bind(name)
    .bind(store_id)
    .bind(brand_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
