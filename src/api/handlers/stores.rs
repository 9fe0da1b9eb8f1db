//! Handlers for store endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::store::{StoreRequest, StoreResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a store.
///
/// # Endpoint
///
/// `POST /stores`
///
/// # Errors
///
/// Returns 400 if the payload fails validation.
/// Returns 500 on database errors.
pub async fn create_store_handler(
    State(state): State<AppState>,
    Json(payload): Json<StoreRequest>,
) -> Result<(StatusCode, Json<StoreResponse>), AppError> {
    payload.validate()?;

    let store = state.store_service.create_store(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(store.into())))
}

/// Returns a store by ID.
///
/// # Endpoint
///
/// `GET /stores/{id}`
///
/// # Errors
///
/// Returns 404 if the store does not exist.
pub async fn get_store_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StoreResponse>, AppError> {
    let store = state.store_service.get_store(id).await?;

    Ok(Json(store.into()))
}

/// Replaces every field of a store.
///
/// # Endpoint
///
/// `PUT /stores/{id}`
///
/// The body has the same shape as for creation. Omitted optional fields
/// are cleared, not kept.
///
/// # Errors
///
/// Returns 400 if the payload fails validation.
/// Returns 404 if the store does not exist.
pub async fn update_store_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<StoreRequest>,
) -> Result<Json<StoreResponse>, AppError> {
    payload.validate()?;

    let store = state
        .store_service
        .update_store(id, payload.into())
        .await?;

    Ok(Json(store.into()))
}

/// Deletes a store and returns it as it was.
///
/// # Endpoint
///
/// `DELETE /stores/{id}`
///
/// # Errors
///
/// Returns 404 if the store does not exist.
/// Returns 409 if other records still reference it (foreign keys enforced).
pub async fn delete_store_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StoreResponse>, AppError> {
    let store = state.store_service.delete_store(id).await?;

    Ok(Json(store.into()))
}
