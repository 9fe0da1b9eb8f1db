//! Product catalogue service.

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing products.
///
/// `store_id` and `brand_id` are passed through unchecked.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced record is missing and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = self.repository.create(new_product).await?;
        tracing::debug!(product_id = product.id, "Product created");

        Ok(product)
    }

    /// Retrieves a product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every field of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Validation`] if a referenced record is missing and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_product(&self, id: i64, product: NewProduct) -> Result<Product, AppError> {
        let product = self
            .repository
            .replace(id, product)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(product_id = id, "Product replaced");

        Ok(product)
    }

    /// Deletes a product and returns the record as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Conflict`] if the product is still referenced and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_product(&self, id: i64) -> Result<Product, AppError> {
        let product = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(product_id = id, "Product deleted");

        Ok(product)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Product not found", json!({ "id": id }))
}
