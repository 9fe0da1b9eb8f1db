//! API route configuration.

use crate::api::handlers::{
    create_brand_handler, create_payment_handler, create_product_handler,
    create_statistic_handler, create_store_handler, create_user_handler, delete_brand_handler,
    delete_payment_handler, delete_product_handler, delete_statistic_handler,
    delete_store_handler, delete_user_handler, get_brand_handler, get_payment_handler,
    get_product_handler, get_statistic_handler, get_store_handler, get_user_handler,
    update_brand_handler, update_payment_handler, update_product_handler,
    update_statistic_handler, update_store_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Resource routes.
///
/// # Endpoints
///
/// For each `R` in `users`, `stores`, `brands`, `products`, `payments`, `statistics`:
///
/// - `POST   /R`        - Create a record (201)
/// - `GET    /R/{id}`   - Fetch a record
/// - `PUT    /R/{id}`   - Replace a record
/// - `DELETE /R/{id}`   - Delete a record, returning it
///
/// Trailing slashes (`POST /R/`) are handled by the path normalization in
/// [`crate::routes::app_router`].
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/stores", post(create_store_handler))
        .route(
            "/stores/{id}",
            get(get_store_handler)
                .put(update_store_handler)
                .delete(delete_store_handler),
        )
        .route("/brands", post(create_brand_handler))
        .route(
            "/brands/{id}",
            get(get_brand_handler)
                .put(update_brand_handler)
                .delete(delete_brand_handler),
        )
        .route("/products", post(create_product_handler))
        .route(
            "/products/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route("/payments", post(create_payment_handler))
        .route(
            "/payments/{id}",
            get(get_payment_handler)
                .put(update_payment_handler)
                .delete(delete_payment_handler),
        )
        .route("/statistics", post(create_statistic_handler))
        .route(
            "/statistics/{id}",
            get(get_statistic_handler)
                .put(update_statistic_handler)
                .delete(delete_statistic_handler),
        )
}
