//! Brand management service.

use crate::domain::entities::{Brand, NewBrand};
use crate::domain::repositories::BrandRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing brands.
pub struct BrandService<R: BrandRepository> {
    repository: Arc<R>,
}

impl<R: BrandRepository> BrandService<R> {
    /// Creates a new brand service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new brand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_brand(&self, new_brand: NewBrand) -> Result<Brand, AppError> {
        let brand = self.repository.create(new_brand).await?;
        tracing::debug!(brand_id = brand.id, "Brand created");

        Ok(brand)
    }

    /// Retrieves a brand by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the brand does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_brand(&self, id: i64) -> Result<Brand, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every field of an existing brand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the brand does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_brand(&self, id: i64, brand: NewBrand) -> Result<Brand, AppError> {
        let brand = self
            .repository
            .replace(id, brand)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(brand_id = id, "Brand replaced");

        Ok(brand)
    }

    /// Deletes a brand and returns the record as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the brand does not exist.
    /// Returns [`AppError::Conflict`] if the brand is still referenced and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_brand(&self, id: i64) -> Result<Brand, AppError> {
        let brand = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(brand_id = id, "Brand deleted");

        Ok(brand)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Brand not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBrandRepository;

    fn acme() -> NewBrand {
        NewBrand {
            name: "Acme".to_string(),
            description: Some("tools".to_string()),
        }
    }

    fn brand(id: i64, new_brand: NewBrand) -> Brand {
        Brand {
            id,
            name: new_brand.name,
            description: new_brand.description,
        }
    }

    #[tokio::test]
    async fn test_create_brand_success() {
        let mut mock_repo = MockBrandRepository::new();

        mock_repo
            .expect_create()
            .withf(|b| b.name == "Acme")
            .times(1)
            .returning(|b| Ok(brand(1, b)));

        let service = BrandService::new(Arc::new(mock_repo));

        let created = service.create_brand(acme()).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Acme");
        assert_eq!(created.description.as_deref(), Some("tools"));
    }

    #[tokio::test]
    async fn test_get_brand_success() {
        let mut mock_repo = MockBrandRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(brand(id, acme()))));

        let service = BrandService::new(Arc::new(mock_repo));

        assert_eq!(service.get_brand(1).await.unwrap().name, "Acme");
    }

    #[tokio::test]
    async fn test_get_brand_not_found() {
        let mut mock_repo = MockBrandRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BrandService::new(Arc::new(mock_repo));

        let result = service.get_brand(1).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_brand_replaces_all_fields() {
        let mut mock_repo = MockBrandRepository::new();

        mock_repo
            .expect_replace()
            .withf(|id, b| *id == 1 && b.description.is_none())
            .times(1)
            .returning(|id, b| Ok(Some(brand(id, b))));

        let service = BrandService::new(Arc::new(mock_repo));

        let updated = service
            .update_brand(
                1,
                NewBrand {
                    name: "Acme Corp".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Acme Corp");
        assert!(updated.description.is_none());
    }

    #[tokio::test]
    async fn test_delete_brand_not_found() {
        let mut mock_repo = MockBrandRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(None));

        let service = BrandService::new(Arc::new(mock_repo));

        let result = service.delete_brand(9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
