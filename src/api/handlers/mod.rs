//! HTTP request handlers for API endpoints.
//!
//! One module per resource, each with create / get / update / delete handlers.

pub mod brands;
pub mod health;
pub mod payments;
pub mod products;
pub mod statistics;
pub mod stores;
pub mod users;

pub use brands::{
    create_brand_handler, delete_brand_handler, get_brand_handler, update_brand_handler,
};
pub use health::health_handler;
pub use payments::{
    create_payment_handler, delete_payment_handler, get_payment_handler, update_payment_handler,
};
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, update_product_handler,
};
pub use statistics::{
    create_statistic_handler, delete_statistic_handler, get_statistic_handler,
    update_statistic_handler,
};
pub use stores::{
    create_store_handler, delete_store_handler, get_store_handler, update_store_handler,
};
pub use users::{create_user_handler, delete_user_handler, get_user_handler, update_user_handler};
