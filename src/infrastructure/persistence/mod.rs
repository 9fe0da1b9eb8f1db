//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! checked at runtime (`query_as` + `FromRow`), so building the crate does not
//! need a live database.
//!
//! # Repositories
//!
//! - [`SqliteUserRepository`]
//! - [`SqliteStoreRepository`]
//! - [`SqliteBrandRepository`]
//! - [`SqliteProductRepository`]
//! - [`SqlitePaymentRepository`]
//! - [`SqliteStatisticRepository`]
//!
//! Writes are single `INSERT/UPDATE/DELETE ... RETURNING` statements, so each
//! one commits on its own and returns the affected row without a second query.

pub mod pool;
pub mod schema;
pub mod sqlite_brand_repository;
pub mod sqlite_payment_repository;
pub mod sqlite_product_repository;
pub mod sqlite_statistic_repository;
pub mod sqlite_store_repository;
pub mod sqlite_user_repository;

pub use sqlite_brand_repository::SqliteBrandRepository;
pub use sqlite_payment_repository::SqlitePaymentRepository;
pub use sqlite_product_repository::SqliteProductRepository;
pub use sqlite_statistic_repository::SqliteStatisticRepository;
pub use sqlite_store_repository::SqliteStoreRepository;
pub use sqlite_user_repository::SqliteUserRepository;
