//! DTOs for brand endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Brand, NewBrand};

/// Request body for `POST /brands` and `PUT /brands/{id}`.
///
/// `description` may be omitted or `null`.
#[derive(Debug, Deserialize, Validate)]
pub struct BrandRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
}

impl From<BrandRequest> for NewBrand {
    fn from(req: BrandRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BrandResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
            description: brand.description,
        }
    }
}
