//! Handlers for statistic endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::statistic::{StatisticRequest, StatisticResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /statistics`
pub async fn create_statistic_handler(
    State(state): State<AppState>,
    Json(payload): Json<StatisticRequest>,
) -> Result<(StatusCode, Json<StatisticResponse>), AppError> {
    payload.validate()?;

    let statistic = state.statistic_service.create_statistic(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(statistic.into())))
}

/// `GET /statistics/{id}`
pub async fn get_statistic_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StatisticResponse>, AppError> {
    let statistic = state.statistic_service.get_statistic(id).await?;

    Ok(Json(statistic.into()))
}

/// `PUT /statistics/{id}` (full replacement)
pub async fn update_statistic_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<StatisticRequest>,
) -> Result<Json<StatisticResponse>, AppError> {
    payload.validate()?;

    let statistic = state
        .statistic_service
        .update_statistic(id, payload.into())
        .await?;

    Ok(Json(statistic.into()))
}

/// `DELETE /statistics/{id}`, responding with the deleted record.
pub async fn delete_statistic_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StatisticResponse>, AppError> {
    let statistic = state.statistic_service.delete_statistic(id).await?;

    Ok(Json(statistic.into()))
}
