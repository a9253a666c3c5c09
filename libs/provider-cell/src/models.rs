use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;
use shared_utils::format::{format_time, hhmm};

/// A bookable healthcare professional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl Provider {
    pub fn new(id: &str, name: &str, specialty: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
        }
    }
}

/// An open interval on a provider's day. Derived per query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn label(&self) -> String {
        format!("{}-{}", format_time(&self.start), format_time(&self.end))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub provider_id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub provider_id: String,
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("Provider {0} not found")]
    NotFound(String),

    #[error("Provider directory unavailable: {0}")]
    Unavailable(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProviderError::Unavailable(_) => AppError::TransientFailure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_time_slot_wire_format() {
        let slot = TimeSlot::new(t(11, 0), t(11, 30));
        assert_eq!(serde_json::to_value(slot).unwrap(), json!({"start": "11:00", "end": "11:30"}));
        assert_eq!(slot.label(), "11:00-11:30");
    }

    #[test]
    fn test_availability_query_uses_camel_case() {
        let query: AvailabilityQuery =
            serde_json::from_value(json!({"providerId": "2", "date": "2024-08-09"})).unwrap();
        assert_eq!(query.provider_id, "2");
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 8, 9).unwrap());
    }

    #[test]
    fn test_provider_error_maps_to_app_error() {
        let not_found: AppError = ProviderError::NotFound("9".into()).into();
        assert_matches!(not_found, AppError::NotFound(msg) if msg == "Provider 9 not found");

        let unavailable: AppError = ProviderError::Unavailable("timeout".into()).into();
        assert_matches!(unavailable, AppError::TransientFailure(_));
    }
}
