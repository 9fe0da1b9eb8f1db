//! Handlers for payment endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::payment::{PaymentRequest, PaymentResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /payments`
pub async fn create_payment_handler(
    State(state): State<AppState>,
    Json(payload): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), AppError> {
    payload.validate()?;

    let payment = state.payment_service.create_payment(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(payment.into())))
}

/// `GET /payments/{id}`
pub async fn get_payment_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PaymentResponse>, AppError> {
    let payment = state.payment_service.get_payment(id).await?;

    Ok(Json(payment.into()))
}

/// `PUT /payments/{id}` (full replacement)
pub async fn update_payment_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    payload.validate()?;

    let payment = state
        .payment_service
        .update_payment(id, payload.into())
        .await?;

    Ok(Json(payment.into()))
}

/// `DELETE /payments/{id}`, responding with the deleted record.
pub async fn delete_payment_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PaymentResponse>, AppError> {
    let payment = state.payment_service.delete_payment(id).await?;

    Ok(Json(payment.into()))
}
