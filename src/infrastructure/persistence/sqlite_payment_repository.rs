//! SQLite implementation of the payment repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewPayment, Payment};
use crate::domain::repositories::PaymentRepository;
use crate::error::AppError;

/// SQLite repository for payments.
pub struct SqlitePaymentRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePaymentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for SqlitePaymentRepository {
    async fn create(&self, new_payment: NewPayment) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (amount, description, user_id, product_id, store_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, amount, description, user_id, product_id, store_id
            "#,
        )
        .bind(new_payment.amount)
        .bind(new_payment.description)
        .bind(new_payment.user_id)
        .bind(new_payment.product_id)
        .bind(new_payment.store_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(payment)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Payment>, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, amount, description, user_id, product_id, store_id
            FROM payments
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(payment)
    }

    async fn replace(&self, id: i64, payment: NewPayment) -> Result<Option<Payment>, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments SET
                amount      = ?2,
                description = ?3,
                user_id     = ?4,
                product_id  = ?5,
                store_id    = ?6
            WHERE id = ?1
            RETURNING id, amount, description, user_id, product_id, store_id
            "#,
        )
        .bind(id)
        .bind(payment.amount)
        .bind(payment.description)
        .bind(payment.user_id)
        .bind(payment.product_id)
        .bind(payment.store_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(payment)
    }

    async fn delete(&self, id: i64) -> Result<Option<Payment>, AppError> {
        // Nothing references payments, so no foreign key conflict is possible.
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            DELETE FROM payments
            WHERE id = ?1
            RETURNING id, amount, description, user_id, product_id, store_id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(payment)
    }
}
