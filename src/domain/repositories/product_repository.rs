//! Repository trait for products.

use crate::domain::entities::{NewProduct, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing products.
///
/// # Errors
///
/// With foreign keys enforced, `create` and `replace` return
/// [`AppError::Validation`] when `store_id` or `brand_id` points nowhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    async fn replace(&self, id: i64, product: NewProduct) -> Result<Option<Product>, AppError>;

    async fn delete(&self, id: i64) -> Result<Option<Product>, AppError>;
}
