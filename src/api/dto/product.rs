//! DTOs for product endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewProduct, Product};

/// Request body for `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub store_id: i64,
    pub brand_id: i64,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            store_id: req.store_id,
            brand_id: req.brand_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub store_id: i64,
    pub brand_id: i64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            store_id: p.store_id,
            brand_id: p.brand_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negative_price_rejected() {
        let req: ProductRequest = serde_json::from_value(json!({
            "name": "Hammer",
            "price": -1.0,
            "store_id": 1,
            "brand_id": 1
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_missing_reference_fails_to_deserialize() {
        let result = serde_json::from_value::<ProductRequest>(json!({
            "name": "Hammer",
            "price": 1.0,
            "store_id": 1
        }));

        assert!(result.is_err());
    }
}
