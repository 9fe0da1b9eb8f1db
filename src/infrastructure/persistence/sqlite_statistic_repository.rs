//! SQLite implementation of the statistic repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewStatistic, Statistic};
use crate::domain::repositories::StatisticRepository;
use crate::error::AppError;

/// SQLite repository for tracked events.
///
/// `event_time` is stored as RFC 3339 text.
pub struct SqliteStatisticRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStatisticRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatisticRepository for SqliteStatisticRepository {
    async fn create(&self, new_statistic: NewStatistic) -> Result<Statistic, AppError> {
        let statistic = sqlx::query_as::<_, Statistic>(
            r#"
            INSERT INTO statistics (event_type, event_time, user_id, product_id, store_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, event_type, event_time, user_id, product_id, store_id
            "#,
        )
        .bind(new_statistic.event_type)
        .bind(new_statistic.event_time)
        .bind(new_statistic.user_id)
        .bind(new_statistic.product_id)
        .bind(new_statistic.store_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(statistic)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Statistic>, AppError> {
        let statistic = sqlx::query_as::<_, Statistic>(
            r#"
            SELECT id, event_type, event_time, user_id, product_id, store_id
            FROM statistics
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(statistic)
    }

    async fn replace(
        &self,
        id: i64,
        statistic: NewStatistic,
    ) -> Result<Option<Statistic>, AppError> {
        let statistic = sqlx::query_as::<_, Statistic>(
            r#"
            UPDATE statistics SET
                event_type = ?2,
                event_time = ?3,
                user_id    = ?4,
                product_id = ?5,
                store_id   = ?6
            WHERE id = ?1
            RETURNING id, event_type, event_time, user_id, product_id, store_id
            "#,
        )
        .bind(id)
        .bind(statistic.event_type)
        .bind(statistic.event_time)
        .bind(statistic.user_id)
        .bind(statistic.product_id)
        .bind(statistic.store_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(statistic)
    }

    async fn delete(&self, id: i64) -> Result<Option<Statistic>, AppError> {
        let statistic = sqlx::query_as::<_, Statistic>(
            r#"
            DELETE FROM statistics
            WHERE id = ?1
            RETURNING id, event_type, event_time, user_id, product_id, store_id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(statistic)
    }
}
