//! SQLite implementation of the product repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::utils::db_error::map_delete_error;

/// SQLite repository for products.
///
/// References are written as given. Whether a missing store or brand is
/// rejected depends on the pool's foreign key setting.
pub struct SqliteProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, store_id, brand_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, description, price, store_id, brand_id
            "#,
        )
        .bind(new_product.name)
        .bind(new_product.description)
        .bind(new_product.price)
        .bind(new_product.store_id)
        .bind(new_product.brand_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, store_id, brand_id
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn replace(&self, id: i64, product: NewProduct) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name        = ?2,
                description = ?3,
                price       = ?4,
                store_id    = ?5,
                brand_id    = ?6
            WHERE id = ?1
            RETURNING id, name, description, price, store_id, brand_id
            "#,
        )
        .bind(id)
        .bind(product.name)
        .bind(product.description)
        .bind(product.price)
        .bind(product.store_id)
        .bind(product.brand_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<Option<Product>, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            DELETE FROM products
            WHERE id = ?1
            RETURNING id, name, description, price, store_id, brand_id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_delete_error(e, "Product", id))
    }
}
