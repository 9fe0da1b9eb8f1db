//! Repository trait for stores.

use crate::domain::entities::{NewStore, Store};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing stores.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn create(&self, new_store: NewStore) -> Result<Store, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Store>, AppError>;

    async fn replace(&self, id: i64, store: NewStore) -> Result<Option<Store>, AppError>;

    /// Deletes a store, returning the row as it was.
    ///
    /// Products, payments and statistics pointing at the store are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the store is still referenced and
    /// foreign keys are enforced.
    async fn delete(&self, id: i64) -> Result<Option<Store>, AppError>;
}
