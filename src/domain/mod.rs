//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])
//!
//! # Relationships
//!
//! - `products.store_id` → `stores.id`, `products.brand_id` → `brands.id`
//! - `payments.{user_id, product_id, store_id}` → users, products, stores
//! - `statistics.{user_id, product_id, store_id}` → users, products, stores
//!
//! References are plain ids. Nothing cascades on delete.

pub mod entities;
pub mod repositories;
