//! SQLite implementation of the store repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewStore, Store};
use crate::domain::repositories::StoreRepository;
use crate::error::AppError;
use crate::utils::db_error::map_delete_error;

/// SQLite repository for stores.
///
/// Deleting a store leaves its products, payments and statistics untouched.
pub struct SqliteStoreRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStoreRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for SqliteStoreRepository {
    async fn create(&self, new_store: NewStore) -> Result<Store, AppError> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            INSERT INTO stores (name, description)
            VALUES (?1, ?2)
            RETURNING id, name, description
            "#,
        )
        .bind(new_store.name)
        .bind(new_store.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(store)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            SELECT id, name, description
            FROM stores
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(store)
    }

    async fn replace(&self, id: i64, store: NewStore) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            UPDATE stores SET
                name        = ?2,
                description = ?3
            WHERE id = ?1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(store.name)
        .bind(store.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(store)
    }

    async fn delete(&self, id: i64) -> Result<Option<Store>, AppError> {
        sqlx::query_as::<_, Store>(
            r#"
            DELETE FROM stores
            WHERE id = ?1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_delete_error(e, "Store", id))
    }
}
