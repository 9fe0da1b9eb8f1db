//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Contract
//!
//! Every repository exposes the same four operations:
//!
//! - `create` inserts a row and returns it with its generated id
//! - `find_by_id` returns `None` when no row matches
//! - `replace` overwrites every writable field; `None` when no row matches
//! - `delete` removes the row and returns it as it was; `None` when no row matches
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod brand_repository;
pub mod payment_repository;
pub mod product_repository;
pub mod statistic_repository;
pub mod store_repository;
pub mod user_repository;

pub use brand_repository::BrandRepository;
pub use payment_repository::PaymentRepository;
pub use product_repository::ProductRepository;
pub use statistic_repository::StatisticRepository;
pub use store_repository::StoreRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use brand_repository::MockBrandRepository;
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use statistic_repository::MockStatisticRepository;
#[cfg(test)]
pub use store_repository::MockStoreRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
