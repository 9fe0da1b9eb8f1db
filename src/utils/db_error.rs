//! Helpers for classifying SQLite constraint failures.

use serde_json::json;

use crate::error::AppError;

/// Returns true when `e` is a UNIQUE failure on `column` (e.g. `users.username`).
///
/// SQLite reports the offending column in the message rather than a
/// constraint name: `UNIQUE constraint failed: users.username`.
pub fn is_unique_violation_on(e: &sqlx::Error, column: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains(column)
}

/// Returns true when `e` is a FOREIGN KEY failure.
///
/// Only raised when the pool was opened with foreign key enforcement.
pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

/// Maps a failed `DELETE`: a row still referenced by children is a conflict.
pub fn map_delete_error(e: sqlx::Error, resource: &str, id: i64) -> AppError {
    if is_foreign_key_violation(&e) {
        return AppError::conflict(
            format!("{resource} is still referenced by other records"),
            json!({ "id": id }),
        );
    }

    e.into()
}
