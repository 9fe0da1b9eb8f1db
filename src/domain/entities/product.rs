//! Domain entity representing a product.

/// An item sold by one store under one brand.
///
/// `store_id` and `brand_id` are not checked by the application; whether a
/// dangling reference is rejected depends on foreign key enforcement in the
/// storage layer.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub store_id: i64,
    pub brand_id: i64,
}

/// Writable fields of a product, used for create and full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub store_id: i64,
    pub brand_id: i64,
}
