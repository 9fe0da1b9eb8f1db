//! Handlers for product endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::product::{ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a product.
///
/// # Endpoint
///
/// `POST /products`
///
/// # Errors
///
/// Returns 400 if the payload fails validation.
/// Returns 400 if a referenced record is missing (foreign keys enforced).
/// Returns 500 on database errors.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;

    let product = state.product_service.create_product(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Returns a product by ID.
///
/// # Endpoint
///
/// `GET /products/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn get_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_product(id).await?;

    Ok(Json(product.into()))
}

/// Replaces every field of a product.
///
/// # Endpoint
///
/// `PUT /products/{id}`
///
/// The body has the same shape as for creation. Omitted optional fields
/// are cleared, not kept.
///
/// # Errors
///
/// Returns 400 if the payload fails validation.
/// Returns 400 if a referenced record is missing (foreign keys enforced).
/// Returns 404 if the product does not exist.
pub async fn update_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let product = state
        .product_service
        .update_product(id, payload.into())
        .await?;

    Ok(Json(product.into()))
}

/// Deletes a product and returns it as it was.
///
/// # Endpoint
///
/// `DELETE /products/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
/// Returns 409 if other records still reference it (foreign keys enforced).
pub async fn delete_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.delete_product(id).await?;

    Ok(Json(product.into()))
}
