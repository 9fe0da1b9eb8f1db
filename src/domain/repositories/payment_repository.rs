//! Repository trait for payments.

use crate::domain::entities::{NewPayment, Payment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing payments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, new_payment: NewPayment) -> Result<Payment, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Payment>, AppError>;

    async fn replace(&self, id: i64, payment: NewPayment) -> Result<Option<Payment>, AppError>;

    async fn delete(&self, id: i64) -> Result<Option<Payment>, AppError>;
}
