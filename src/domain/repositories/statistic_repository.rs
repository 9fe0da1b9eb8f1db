//! Repository trait for tracked events.

use crate::domain::entities::{NewStatistic, Statistic};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatisticRepository: Send + Sync {
    async fn create(&self, new_statistic: NewStatistic) -> Result<Statistic, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Statistic>, AppError>;

    async fn replace(
        &self,
        id: i64,
        statistic: NewStatistic,
    ) -> Result<Option<Statistic>, AppError>;

    async fn delete(&self, id: i64) -> Result<Option<Statistic>, AppError>;
}
