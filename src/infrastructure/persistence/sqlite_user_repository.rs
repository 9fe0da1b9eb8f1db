//! SQLite implementation of the user repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::map_delete_error;

/// SQLite repository for user accounts.
///
/// Uniqueness of `username` and `email` is enforced by the schema; violations
/// surface through [`crate::error::map_sqlx_error`].
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, email, password_hash
            "#,
        )
        .bind(new_user.username)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn replace(&self, id: i64, user: NewUser) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                username      = ?2,
                email         = ?3,
                password_hash = ?4
            WHERE id = ?1
            RETURNING id, username, email, password_hash
            "#,
        )
        .bind(id)
        .bind(user.username)
        .bind(user.email)
        .bind(user.password_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users
            WHERE id = ?1
            RETURNING id, username, email, password_hash
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_delete_error(e, "User", id))
    }
}
