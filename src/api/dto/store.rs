//! DTOs for store endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewStore, Store};

/// Request body for `POST /stores` and `PUT /stores/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct StoreRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
}

impl From<StoreRequest> for NewStore {
    fn from(req: StoreRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoreResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            name: store.name,
            description: store.description,
        }
    }
}
