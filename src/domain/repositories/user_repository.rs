//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is already taken.
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Overwrites every field of the user.
    ///
    /// # Errors
    ///
    /// Same as [`UserRepository::create`].
    async fn replace(&self, id: i64, user: NewUser) -> Result<Option<User>, AppError>;

    /// Deletes a user, returning the row as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if payments or statistics still reference
    /// the user and foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<Option<User>, AppError>;
}
