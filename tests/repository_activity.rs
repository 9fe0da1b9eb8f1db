mod common;

use chrono::{TimeZone, Utc};
use shop_catalog::domain::entities::{NewPayment, NewStatistic};
use shop_catalog::domain::repositories::{PaymentRepository, StatisticRepository};
use shop_catalog::infrastructure::persistence::{
    SqlitePaymentRepository, SqliteStatisticRepository,
};
use std::sync::Arc;

#[tokio::test]
async fn test_payment_crud() {
    let repo = SqlitePaymentRepository::new(Arc::new(common::test_pool().await));

    let payment = repo
        .create(NewPayment {
            amount: 12.0,
            description: Some("gift".to_string()),
            user_id: 1,
            product_id: 2,
            store_id: 3,
        })
        .await
        .unwrap();

    assert_eq!(payment.amount, 12.0);
    assert_eq!(repo.find_by_id(payment.id).await.unwrap(), Some(payment.clone()));

    let replaced = repo
        .replace(
            payment.id,
            NewPayment {
                amount: 0.0,
                description: None,
                user_id: 1,
                product_id: 2,
                store_id: 3,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.amount, 0.0);
    assert_eq!(replaced.description, None);

    assert_eq!(repo.delete(payment.id).await.unwrap(), Some(replaced));
    assert!(repo.delete(payment.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_statistic_event_time_round_trips() {
    let repo = SqliteStatisticRepository::new(Arc::new(common::test_pool().await));
    let event_time = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();

    let stat = repo
        .create(NewStatistic::new("view".to_string(), Some(event_time), 1, 2, 3))
        .await
        .unwrap();

    assert_eq!(stat.event_time, event_time);

    let found = repo.find_by_id(stat.id).await.unwrap().unwrap();
    assert_eq!(found, stat);
}

#[tokio::test]
async fn test_statistic_replace_and_delete() {
    let repo = SqliteStatisticRepository::new(Arc::new(common::test_pool().await));

    let stat = repo
        .create(NewStatistic::new("view".to_string(), None, 1, 1, 1))
        .await
        .unwrap();

    let replaced = repo
        .replace(
            stat.id,
            NewStatistic::new("purchase".to_string(), None, 2, 2, 2),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.event_type, "purchase");
    assert!(replaced.event_time >= stat.event_time);

    assert!(repo.delete(stat.id).await.unwrap().is_some());
    assert!(repo.find_by_id(stat.id).await.unwrap().is_none());
}
