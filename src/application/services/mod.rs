//! Business logic services for the application layer.
//!
//! Every service exposes create / get / update / delete. `get`, `update` and
//! `delete` turn a missing row into [`crate::error::AppError::NotFound`].

pub mod brand_service;
pub mod payment_service;
pub mod product_service;
pub mod statistic_service;
pub mod store_service;
pub mod user_service;

pub use brand_service::BrandService;
pub use payment_service::PaymentService;
pub use product_service::ProductService;
pub use statistic_service::StatisticService;
pub use store_service::StoreService;
pub use user_service::UserService;
