//! Domain entity representing a payment.

/// A purchase of a product by a user in a store.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub amount: f64,
    pub description: Option<String>,
    pub user_id: i64,
    pub product_id: i64,
    pub store_id: i64,
}

/// Writable fields of a payment, used for create and full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub amount: f64,
    pub description: Option<String>,
    pub user_id: i64,
    pub product_id: i64,
    pub store_id: i64,
}
