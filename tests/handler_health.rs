mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use shop_catalog::routes;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::make_server(common::test_pool().await);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool.clone());
    pool.close().await;

    let server = TestServer::new(routes::router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let pool = common::test_pool().await;
    let app = routes::app_router(common::create_test_state(pool));

    let request = Request::builder()
        .method("POST")
        .uri("/brands/")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"Acme","description":"tools"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}
