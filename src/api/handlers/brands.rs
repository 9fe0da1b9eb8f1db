//! Handlers for brand endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::brand::{BrandRequest, BrandResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /brands`
pub async fn create_brand_handler(
    State(state): State<AppState>,
    Json(payload): Json<BrandRequest>,
) -> Result<(StatusCode, Json<BrandResponse>), AppError> {
    payload.validate()?;

    let brand = state.brand_service.create_brand(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(brand.into())))
}

/// `GET /brands/{id}`
pub async fn get_brand_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<BrandResponse>, AppError> {
    let brand = state.brand_service.get_brand(id).await?;

    Ok(Json(brand.into()))
}

/// `PUT /brands/{id}` (full replacement)
pub async fn update_brand_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<BrandRequest>,
) -> Result<Json<BrandResponse>, AppError> {
    payload.validate()?;

    let brand = state
        .brand_service
        .update_brand(id, payload.into())
        .await?;

    Ok(Json(brand.into()))
}

/// `DELETE /brands/{id}`, responding with the deleted record.
pub async fn delete_brand_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<BrandResponse>, AppError> {
    let brand = state.brand_service.delete_brand(id).await?;

    Ok(Json(brand.into()))
}
