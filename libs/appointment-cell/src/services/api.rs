// libs/appointment-cell/src/services/api.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use provider_cell::models::{Provider, TimeSlot};
use provider_cell::services::{AvailabilityService, ProviderDirectory, StaticProviderDirectory};
use shared_config::AppConfig;

use crate::models::{Appointment, AppointmentError, BookAppointmentRequest};
use crate::services::booking::AppointmentBookingService;
use crate::services::store::BookingStore;

/// The calls the scheduling workflow makes against the backend.
///
/// Every call may fail with [`AppointmentError::TransientFailure`] once the
/// backend is remote, even where the in-process implementation never does.
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    async fn list_providers(&self) -> Result<Vec<Provider>, AppointmentError>;

    async fn available_slots(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, AppointmentError>;

    async fn book(&self, request: BookAppointmentRequest) -> Result<Appointment, AppointmentError>;

    async fn list_upcoming(&self, user_id: &str) -> Result<Vec<Appointment>, AppointmentError>;

    async fn cancel(&self, appointment_id: &str) -> Result<bool, AppointmentError>;
}

/// [`SchedulingApi`] served straight from the in-process services.
pub struct LocalSchedulingApi {
    directory: Arc<dyn ProviderDirectory>,
    availability: AvailabilityService,
    booking: Arc<AppointmentBookingService>,
}

impl LocalSchedulingApi {
    pub fn new(config: &AppConfig, store: Arc<BookingStore>) -> Self {
        Self {
            directory: Arc::new(StaticProviderDirectory::new(config)),
            availability: AvailabilityService::new(config),
            booking: Arc::new(AppointmentBookingService::new(config, store)),
        }
    }

    pub fn with_booking(
        config: &AppConfig,
        directory: Arc<dyn ProviderDirectory>,
        booking: Arc<AppointmentBookingService>,
    ) -> Self {
        Self {
            directory,
            availability: AvailabilityService::new(config),
            booking,
        }
    }
}

#[async_trait]
impl SchedulingApi for LocalSchedulingApi {
    async fn list_providers(&self) -> Result<Vec<Provider>, AppointmentError> {
        Ok(self.directory.list_providers().await?)
    }

    async fn available_slots(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, AppointmentError> {
        Ok(self.availability.available_slots(provider_id, date).await)
    }

    async fn book(&self, request: BookAppointmentRequest) -> Result<Appointment, AppointmentError> {
        self.booking.create(request).await
    }

    async fn list_upcoming(&self, user_id: &str) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.booking.list_upcoming(user_id).await)
    }

    async fn cancel(&self, appointment_id: &str) -> Result<bool, AppointmentError> {
        Ok(self.booking.cancel(appointment_id).await)
    }
}
