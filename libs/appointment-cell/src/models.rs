// libs/appointment-cell/src/models.rs
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use provider_cell::models::{Provider, ProviderError, TimeSlot};
use shared_models::error::AppError;
use shared_utils::format::{combine, hhmm};

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked visit.
///
/// `doctor_name` and `specialty` are copied from the provider at booking time
/// and are never refreshed from the directory afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub provider_id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub doctor_name: String,
    pub specialty: String,
    #[serde(default)]
    pub is_virtual: bool,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
}

impl Appointment {
    pub fn new(id: String, provider: &Provider, request: &BookAppointmentRequest) -> Self {
        Self {
            id,
            provider_id: provider.id.clone(),
            date: request.date,
            start: request.start,
            end: request.end,
            doctor_name: provider.name.clone(),
            specialty: provider.specialty.clone(),
            is_virtual: request.is_virtual.unwrap_or(false),
            start_date_time: combine(request.date, request.start),
            end_date_time: combine(request.date, request.end),
        }
    }

    /// Strictly after `now`; an appointment starting this minute is no longer upcoming.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.start_date_time > now
    }

}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub provider_id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    #[serde(default)]
    pub is_virtual: Option<bool>,
}

impl BookAppointmentRequest {
    pub fn new(provider_id: &str, date: NaiveDate, slot: TimeSlot) -> Self {
        Self {
            provider_id: provider_id.to_string(),
            date,
            start: slot.start,
            end: slot.end,
            is_virtual: None,
        }
    }

    pub fn virtual_visit(mut self) -> Self {
        self.is_virtual = Some(true);
        self
    }

    pub fn validate(&self) -> Result<(), AppointmentError> {
        if self.start >= self.end {
            return Err(AppointmentError::ValidationError(
                "Start time must be before end time".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingAppointmentsQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAppointmentResponse {
    pub appointment_id: String,
    pub cancelled: bool,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppointmentError {
    #[error("Provider {0} not found")]
    ProviderNotFound(String),

    #[error("Appointment {0} already exists")]
    DuplicateId(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Service temporarily unavailable: {0}")]
    TransientFailure(String),
}

impl From<ProviderError> for AppointmentError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(id) => AppointmentError::ProviderNotFound(id),
            ProviderError::Unavailable(msg) => AppointmentError::TransientFailure(msg),
        }
    }
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::ProviderNotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            AppointmentError::TransientFailure(msg) => AppError::TransientFailure(msg),
            AppointmentError::DuplicateId(_) => AppError::Internal(err.to_string()),
        }
    }
}
