//! Repository trait for brands.

use crate::domain::entities::{Brand, NewBrand};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing brands.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn create(&self, new_brand: NewBrand) -> Result<Brand, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Brand>, AppError>;

    async fn replace(&self, id: i64, brand: NewBrand) -> Result<Option<Brand>, AppError>;

    async fn delete(&self, id: i64) -> Result<Option<Brand>, AppError>;
}
