//! Domain entity representing a tracked event.

use chrono::{DateTime, Utc};

/// An event (view, purchase, ...) involving a user, a product and a store.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Statistic {
    pub id: i64,
    pub event_type: String,
    pub event_time: DateTime<Utc>,
    pub user_id: i64,
    pub product_id: i64,
    pub store_id: i64,
}

/// Writable fields of a statistic, used for create and full replace.
///
/// `event_time` is always concrete here; defaulting to "now" happens when the
/// request is converted (see [`NewStatistic::new`]).
#[derive(Debug, Clone, PartialEq)]
pub struct NewStatistic {
    pub event_type: String,
    pub event_time: DateTime<Utc>,
    pub user_id: i64,
    pub product_id: i64,
    pub store_id: i64,
}

impl NewStatistic {
    /// Creates the input for a statistic, stamping it with the current time
    /// when `event_time` is `None`.
    pub fn new(
        event_type: String,
        event_time: Option<DateTime<Utc>>,
        user_id: i64,
        product_id: i64,
        store_id: i64,
    ) -> Self {
        Self {
            event_type,
            event_time: event_time.unwrap_or_else(Utc::now),
            user_id,
            product_id,
            store_id,
        }
    }
}
