mod common;

use shop_catalog::AppError;
use shop_catalog::domain::entities::{NewBrand, NewProduct, NewStore};
use shop_catalog::domain::repositories::{BrandRepository, ProductRepository, StoreRepository};
use shop_catalog::infrastructure::persistence::{
    SqliteBrandRepository, SqliteProductRepository, SqliteStoreRepository,
};
use std::sync::Arc;

fn new_product(name: &str, store_id: i64, brand_id: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        price: 4.5,
        store_id,
        brand_id,
    }
}

#[tokio::test]
async fn test_store_crud() {
    let repo = SqliteStoreRepository::new(Arc::new(common::test_pool().await));

    let store = repo
        .create(NewStore {
            name: "Main".to_string(),
            description: Some("downtown".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(repo.find_by_id(store.id).await.unwrap(), Some(store.clone()));

    let replaced = repo
        .replace(
            store.id,
            NewStore {
                name: "Main St".to_string(),
                description: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.name, "Main St");
    assert_eq!(replaced.description, None);

    let deleted = repo.delete(store.id).await.unwrap();
    assert_eq!(deleted, Some(replaced));
    assert!(repo.find_by_id(store.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_brand_crud() {
    let repo = SqliteBrandRepository::new(Arc::new(common::test_pool().await));

    let brand = repo
        .create(NewBrand {
            name: "Acme".to_string(),
            description: Some("tools".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(brand.name, "Acme");

    let deleted = repo.delete(brand.id).await.unwrap();
    assert_eq!(deleted, Some(brand));
    assert!(repo.delete(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_product_references_unchecked_by_default() {
    let repo = SqliteProductRepository::new(Arc::new(common::test_pool().await));

    let product = repo.create(new_product("Orphan", 404, 405)).await.unwrap();

    assert_eq!(product.store_id, 404);
    assert_eq!(product.brand_id, 405);
}

#[tokio::test]
async fn test_product_references_checked_with_foreign_keys() {
    let pool = Arc::new(common::test_pool_with_foreign_keys().await);
    let products = SqliteProductRepository::new(pool.clone());

    let result = products.create(new_product("Orphan", 404, 405)).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));

    let store_id = common::create_test_store(&pool, "Main").await;
    let brand_id = common::create_test_brand(&pool, "Acme").await;
    let product = products
        .create(new_product("Hammer", store_id, brand_id))
        .await
        .unwrap();

    let result = products
        .replace(product.id, new_product("Hammer", store_id, 999))
        .await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[tokio::test]
async fn test_delete_referenced_parent_with_foreign_keys() {
    let pool = Arc::new(common::test_pool_with_foreign_keys().await);
    let stores = SqliteStoreRepository::new(pool.clone());
    let brands = SqliteBrandRepository::new(pool.clone());

    let store_id = common::create_test_store(&pool, "Main").await;
    let brand_id = common::create_test_brand(&pool, "Acme").await;
    common::create_test_product(&pool, "Hammer", store_id, brand_id).await;

    assert!(matches!(
        stores.delete(store_id).await,
        Err(AppError::Conflict { .. })
    ));
    assert!(matches!(
        brands.delete(brand_id).await,
        Err(AppError::Conflict { .. })
    ));
    assert!(stores.find_by_id(store_id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_referenced_parent_without_foreign_keys() {
    let pool = Arc::new(common::test_pool().await);
    let stores = SqliteStoreRepository::new(pool.clone());
    let products = SqliteProductRepository::new(pool.clone());

    let store_id = common::create_test_store(&pool, "Main").await;
    let product_id = common::create_test_product(&pool, "Hammer", store_id, 1).await;

    assert!(stores.delete(store_id).await.unwrap().is_some());

    // Children are never removed along with their parent.
    let product = products.find_by_id(product_id).await.unwrap().unwrap();
    assert_eq!(product.store_id, store_id);
}
