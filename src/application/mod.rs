//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::UserService`] - Accounts, with the unique-username rule
//! - [`services::StoreService`], [`services::BrandService`] - Catalogue owners
//! - [`services::ProductService`] - Products
//! - [`services::PaymentService`] - Payments
//! - [`services::StatisticService`] - Tracked events

pub mod services;
