//! Domain entity representing a user account.

/// A registered user.
///
/// `password_hash` is stored as supplied by the client and is never exposed
/// through the API representation.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Writable fields of a user, used for create and full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Builds the persisted form of `new_user` under identifier `id`.
    pub fn from_new(id: i64, new_user: NewUser) -> Self {
        Self {
            id,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
        }
    }
}
