//! User account service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing user accounts.
///
/// Enforces that a username belongs to at most one user. The check runs before
/// the write; the unique index on `users.username` catches concurrent races and
/// is reported with the same error.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is already taken.
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        if self
            .repository
            .find_by_username(&new_user.username)
            .await?
            .is_some()
        {
            return Err(username_taken(&new_user.username));
        }

        let user = self.repository.create(new_user).await?;
        tracing::debug!(user_id = user.id, "User created");

        Ok(user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every field of an existing user.
    ///
    /// Keeping one's own username is allowed; taking another user's is not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Validation`] if the username belongs to another user.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: i64, user: NewUser) -> Result<User, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        if let Some(holder) = self.repository.find_by_username(&user.username).await?
            && holder.id != id
        {
            return Err(username_taken(&user.username));
        }

        let user = self
            .repository
            .replace(id, user)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(user_id = id, "User replaced");

        Ok(user)
    }

    /// Deletes a user and returns the record as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<User, AppError> {
        let user = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(user_id = id, "User deleted");

        Ok(user)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
}

fn username_taken(username: &str) -> AppError {
    AppError::bad_request("Username already taken", json!({ "username": username }))
}
