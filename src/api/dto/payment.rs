//! DTOs for payment endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewPayment, Payment};

/// Request body for `POST /payments` and `PUT /payments/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct PaymentRequest {
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
    pub description: Option<String>,
    pub user_id: i64,
    pub product_id: i64,
    pub store_id: i64,
}

impl From<PaymentRequest> for NewPayment {
    fn from(req: PaymentRequest) -> Self {
        Self {
            amount: req.amount,
            description: req.description,
            user_id: req.user_id,
            product_id: req.product_id,
            store_id: req.store_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub amount: f64,
    pub description: Option<String>,
    pub user_id: i64,
    pub product_id: i64,
    pub store_id: i64,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            amount: p.amount,
            description: p.description,
            user_id: p.user_id,
            product_id: p.product_id,
            store_id: p.store_id,
        }
    }
}
