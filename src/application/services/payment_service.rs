//! Payment service.

use crate::domain::entities::{NewPayment, Payment};
use crate::domain::repositories::PaymentRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for recording payments.
pub struct PaymentService<R: PaymentRepository> {
    repository: Arc<R>,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new payment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced record is missing and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment, AppError> {
        let payment = self.repository.create(new_payment).await?;
        tracing::debug!(payment_id = payment.id, "Payment created");

        Ok(payment)
    }

    /// Retrieves a payment by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the payment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_payment(&self, id: i64) -> Result<Payment, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every field of an existing payment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the payment does not exist.
    /// Returns [`AppError::Validation`] if a referenced record is missing and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_payment(&self, id: i64, payment: NewPayment) -> Result<Payment, AppError> {
        let payment = self
            .repository
            .replace(id, payment)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(payment_id = id, "Payment replaced");

        Ok(payment)
    }

    /// Deletes a payment and returns the record as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the payment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_payment(&self, id: i64) -> Result<Payment, AppError> {
        let payment = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(payment_id = id, "Payment deleted");

        Ok(payment)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Payment not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPaymentRepository;

    fn payment(id: i64) -> Payment {
        Payment {
            id,
            amount: 42.5,
            description: None,
            user_id: 1,
            product_id: 2,
            store_id: 3,
        }
    }

    #[tokio::test]
    async fn test_get_payment_success() {
        let mut mock_repo = MockPaymentRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|id| Ok(Some(payment(id))));

        let service = PaymentService::new(Arc::new(mock_repo));

        assert_eq!(service.get_payment(5).await.unwrap(), payment(5));
    }

    #[tokio::test]
    async fn test_delete_payment_not_found() {
        let mut mock_repo = MockPaymentRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(None));

        let service = PaymentService::new(Arc::new(mock_repo));

        let result = service.delete_payment(5).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_internal_error_is_propagated() {
        let mut mock_repo = MockPaymentRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = PaymentService::new(Arc::new(mock_repo));

        let result = service
            .create_payment(NewPayment {
                amount: 1.0,
                description: None,
                user_id: 1,
                product_id: 1,
                store_id: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
