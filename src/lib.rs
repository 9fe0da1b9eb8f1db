//! # Shop Catalog
//!
//! A CRUD backend for six related resources (users, stores, brands, products,
//! payments, statistics) built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Per-resource services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, schema and repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shops.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        BrandService, PaymentService, ProductService, StatisticService, StoreService, UserService,
    };
    pub use crate::domain::entities::{
        Brand, NewBrand, NewPayment, NewProduct, NewStatistic, NewStore, NewUser, Payment,
        Product, Statistic, Store, User,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
