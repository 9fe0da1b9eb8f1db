//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{UserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 if the payload fails validation.
/// Returns 400 if the username is already taken.
/// Returns 409 if the email is already taken.
/// Returns 500 on database errors.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Returns a user by ID.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Replaces every field of a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// The body has the same shape as for creation, including `password_hash`.
///
/// # Errors
///
/// Returns 400 if the payload fails validation.
/// Returns 400 if the username belongs to another user.
/// Returns 404 if the user does not exist.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .update_user(id, payload.into())
        .await?;

    Ok(Json(user.into()))
}

/// Deletes a user and returns it as it was.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 409 if other records still reference it (foreign keys enforced).
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.delete_user(id).await?;

    Ok(Json(user.into()))
}
