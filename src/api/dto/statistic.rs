//! DTOs for statistic endpoints.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use validator::Validate;

use crate::domain::entities::{NewStatistic, Statistic};

/// Request body for `POST /statistics` and `PUT /statistics/{id}`.
///
/// `event_time` is an ISO-8601 timestamp. One without an offset is taken as
/// UTC. When absent, the time the request is processed is used, on update as
/// well as on create.
#[derive(Debug, Deserialize, Validate)]
pub struct StatisticRequest {
    #[validate(length(min = 1, max = 100))]
    pub event_type: String,
    #[serde(default, deserialize_with = "deserialize_event_time")]
    pub event_time: Option<DateTime<Utc>>,
    pub user_id: i64,
    pub product_id: i64,
    pub store_id: i64,
}

/// Accepts `2024-03-01T10:15:00Z`, `2024-03-01T12:15:00+02:00` and the naive
/// `2024-03-01T10:15:00`.
fn deserialize_event_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(time) = raw.parse::<DateTime<Utc>>() {
        return Ok(Some(time));
    }

    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| de::Error::custom(format!("invalid event_time '{raw}'")))
}

impl From<StatisticRequest> for NewStatistic {
    fn from(req: StatisticRequest) -> Self {
        NewStatistic::new(
            req.event_type,
            req.event_time,
            req.user_id,
            req.product_id,
            req.store_id,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct StatisticResponse {
    pub id: i64,
    pub event_type: String,
    pub event_time: DateTime<Utc>,
    pub user_id: i64,
    pub product_id: i64,
    pub store_id: i64,
}

impl From<Statistic> for StatisticResponse {
    fn from(s: Statistic) -> Self {
        Self {
            id: s.id,
            event_type: s.event_type,
            event_time: s.event_time,
            user_id: s.user_id,
            product_id: s.product_id,
            store_id: s.store_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_event_time_parsed_from_rfc3339() {
        let req: StatisticRequest = serde_json::from_value(json!({
            "event_type": "view",
            "event_time": "2024-03-01T10:15:00Z",
            "user_id": 1,
            "product_id": 2,
            "store_id": 3
        }))
        .unwrap();

        let new_stat = NewStatistic::from(req);

        assert_eq!(
            new_stat.event_time,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_naive_event_time_is_utc() {
        let req: StatisticRequest = serde_json::from_value(json!({
            "event_type": "view",
            "event_time": "2024-03-01T10:15:00",
            "user_id": 1,
            "product_id": 2,
            "store_id": 3
        }))
        .unwrap();

        assert_eq!(
            req.event_time,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap())
        );
    }

    #[test]
    fn test_offset_event_time_converted_to_utc() {
        let req: StatisticRequest = serde_json::from_value(json!({
            "event_type": "view",
            "event_time": "2024-03-01T12:15:00.5+02:00",
            "user_id": 1,
            "product_id": 2,
            "store_id": 3
        }))
        .unwrap();

        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(req.event_time, Some(expected));
    }

    #[test]
    fn test_missing_or_null_event_time() {
        let missing: StatisticRequest = serde_json::from_value(json!({
            "event_type": "view",
            "user_id": 1,
            "product_id": 2,
            "store_id": 3
        }))
        .unwrap();
        assert!(missing.event_time.is_none());

        let null: StatisticRequest = serde_json::from_value(json!({
            "event_type": "view",
            "event_time": null,
            "user_id": 1,
            "product_id": 2,
            "store_id": 3
        }))
        .unwrap();
        assert!(null.event_time.is_none());
    }

    #[test]
    fn test_garbage_event_time_rejected() {
        let result: Result<StatisticRequest, _> = serde_json::from_value(json!({
            "event_type": "view",
            "event_time": "yesterday",
            "user_id": 1,
            "product_id": 2,
            "store_id": 3
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_event_type_rejected() {
        let req: StatisticRequest = serde_json::from_value(json!({
            "event_type": "",
            "user_id": 1,
            "product_id": 2,
            "store_id": 3
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }
}
