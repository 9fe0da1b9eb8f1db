//! Store management service.

use crate::domain::entities::{NewStore, Store};
use crate::domain::repositories::StoreRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing stores.
///
/// Deleting a store does not touch the products, payments or statistics that
/// point at it.
pub struct StoreService<R: StoreRepository> {
    repository: Arc<R>,
}

impl<R: StoreRepository> StoreService<R> {
    /// Creates a new store service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_store(&self, new_store: NewStore) -> Result<Store, AppError> {
        let store = self.repository.create(new_store).await?;
        tracing::debug!(store_id = store.id, "Store created");

        Ok(store)
    }

    /// Retrieves a store by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_store(&self, id: i64) -> Result<Store, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every field of an existing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_store(&self, id: i64, store: NewStore) -> Result<Store, AppError> {
        let store = self
            .repository
            .replace(id, store)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(store_id = id, "Store replaced");

        Ok(store)
    }

    /// Deletes a store and returns the record as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store does not exist.
    /// Returns [`AppError::Conflict`] if the store is still referenced and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_store(&self, id: i64) -> Result<Store, AppError> {
        let store = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(store_id = id, "Store deleted");

        Ok(store)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Store not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStoreRepository;

    fn store(id: i64) -> Store {
        Store {
            id,
            name: "Corner Shop".to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_store_success() {
        let mut mock_repo = MockStoreRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Ok(store(1)));

        let service = StoreService::new(Arc::new(mock_repo));

        let result = service
            .create_store(NewStore {
                name: "Corner Shop".to_string(),
                description: None,
            })
            .await;

        assert_eq!(result.unwrap(), store(1));
    }

    #[tokio::test]
    async fn test_update_store_not_found() {
        let mut mock_repo = MockStoreRepository::new();

        mock_repo
            .expect_replace()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = StoreService::new(Arc::new(mock_repo));

        let result = service
            .update_store(
                7,
                NewStore {
                    name: "Gone".to_string(),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_store_still_referenced() {
        let mut mock_repo = MockStoreRepository::new();

        mock_repo.expect_delete().times(1).returning(|id| {
            Err(AppError::conflict(
                "Store is still referenced by other records",
                json!({ "id": id }),
            ))
        });

        let service = StoreService::new(Arc::new(mock_repo));

        let result = service.delete_store(1).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_delete_store_returns_deleted_record() {
        let mut mock_repo = MockStoreRepository::new();

        mock_repo
            .expect_delete()
            .times(1)
            .returning(|id| Ok(Some(store(id))));

        let service = StoreService::new(Arc::new(mock_repo));

        assert_eq!(service.delete_store(4).await.unwrap(), store(4));
    }
}
