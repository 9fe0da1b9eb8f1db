//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Each resource has one request type, accepted by both
//! `POST` and `PUT`, and one response type.

pub mod brand;
pub mod health;
pub mod payment;
pub mod product;
pub mod statistic;
pub mod store;
pub mod user;
