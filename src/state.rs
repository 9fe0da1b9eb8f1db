//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{
    BrandService, PaymentService, ProductService, StatisticService, StoreService, UserService,
};
use crate::infrastructure::persistence::{
    SqliteBrandRepository, SqlitePaymentRepository, SqliteProductRepository,
    SqliteStatisticRepository, SqliteStoreRepository, SqliteUserRepository,
};

/// Services for the six resources plus the pool used by the health check.
///
/// Built once at start-up from an explicit pool; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqlitePool>,
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub store_service: Arc<StoreService<SqliteStoreRepository>>,
    pub brand_service: Arc<BrandService<SqliteBrandRepository>>,
    pub product_service: Arc<ProductService<SqliteProductRepository>>,
    pub payment_service: Arc<PaymentService<SqlitePaymentRepository>>,
    pub statistic_service: Arc<StatisticService<SqliteStatisticRepository>>,
}

impl AppState {
    /// Wires every repository and service onto `pool`.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
        let store_repo = Arc::new(SqliteStoreRepository::new(pool.clone()));
        let brand_repo = Arc::new(SqliteBrandRepository::new(pool.clone()));
        let product_repo = Arc::new(SqliteProductRepository::new(pool.clone()));
        let payment_repo = Arc::new(SqlitePaymentRepository::new(pool.clone()));
        let statistic_repo = Arc::new(SqliteStatisticRepository::new(pool.clone()));

        Self {
            db: pool,
            user_service: Arc::new(UserService::new(user_repo)),
            store_service: Arc::new(StoreService::new(store_repo)),
            brand_service: Arc::new(BrandService::new(brand_repo)),
            product_service: Arc::new(ProductService::new(product_repo)),
            payment_service: Arc::new(PaymentService::new(payment_repo)),
            statistic_service: Arc::new(StatisticService::new(statistic_repo)),
        }
    }
}
