//! SQLite implementation of the brand repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Brand, NewBrand};
use crate::domain::repositories::BrandRepository;
use crate::error::AppError;
use crate::utils::db_error::map_delete_error;

/// SQLite repository for brands.
pub struct SqliteBrandRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBrandRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for SqliteBrandRepository {
    async fn create(&self, new_brand: NewBrand) -> Result<Brand, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            INSERT INTO brands (name, description)
            VALUES (?1, ?2)
            RETURNING id, name, description
            "#,
        )
        .bind(new_brand.name)
        .bind(new_brand.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(brand)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Brand>, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            SELECT id, name, description
            FROM brands
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(brand)
    }

    async fn replace(&self, id: i64, brand: NewBrand) -> Result<Option<Brand>, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            UPDATE brands SET
                name        = ?2,
                description = ?3
            WHERE id = ?1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(brand.name)
        .bind(brand.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(brand)
    }

    async fn delete(&self, id: i64) -> Result<Option<Brand>, AppError> {
        sqlx::query_as::<_, Brand>(
            r#"
            DELETE FROM brands
            WHERE id = ?1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_delete_error(e, "Brand", id))
    }
}
