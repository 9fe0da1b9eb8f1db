//! Event statistics service.

use crate::domain::entities::{NewStatistic, Statistic};
use crate::domain::repositories::StatisticRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for recording tracked events.
pub struct StatisticService<R: StatisticRepository> {
    repository: Arc<R>,
}

impl<R: StatisticRepository> StatisticService<R> {
    /// Creates a new statistic service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new statistic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced record is missing and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_statistic(
        &self,
        new_statistic: NewStatistic,
    ) -> Result<Statistic, AppError> {
        let statistic = self.repository.create(new_statistic).await?;
        tracing::debug!(statistic_id = statistic.id, "Statistic created");

        Ok(statistic)
    }

    /// Retrieves a statistic by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the statistic does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_statistic(&self, id: i64) -> Result<Statistic, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every field of an existing statistic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the statistic does not exist.
    /// Returns [`AppError::Validation`] if a referenced record is missing and
    /// foreign keys are enforced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_statistic(
        &self,
        id: i64,
        statistic: NewStatistic,
    ) -> Result<Statistic, AppError> {
        let statistic = self
            .repository
            .replace(id, statistic)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(statistic_id = id, "Statistic replaced");

        Ok(statistic)
    }

    /// Deletes a statistic and returns the record as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the statistic does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_statistic(&self, id: i64) -> Result<Statistic, AppError> {
        let statistic = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(statistic_id = id, "Statistic deleted");

        Ok(statistic)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Statistic not found", json!({ "id": id }))
}
