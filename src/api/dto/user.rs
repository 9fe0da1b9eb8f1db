//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User};

/// Request body for `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Opaque hash produced by the client; stored as given.
    #[validate(length(min = 1))]
    pub password_hash: String,
}

impl From<UserRequest> for NewUser {
    fn from(req: UserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password_hash: req.password_hash,
        }
    }
}

/// Public representation of a user. The password hash is never returned.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
