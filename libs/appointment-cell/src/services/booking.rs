// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use provider_cell::services::{ProviderDirectory, StaticProviderDirectory};
use shared_config::AppConfig;
use shared_utils::{simulate_latency, Clock, SystemClock};

use crate::models::{Appointment, AppointmentError, BookAppointmentRequest};
use crate::services::store::BookingStore;

/// Create, list and cancel operations over the shared [`BookingStore`].
pub struct AppointmentBookingService {
    store: Arc<BookingStore>,
    directory: Arc<dyn ProviderDirectory>,
    clock: Arc<dyn Clock>,
    latency_ms: u64,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig, store: Arc<BookingStore>) -> Self {
        Self {
            store,
            directory: Arc::new(StaticProviderDirectory::new(config)),
            clock: Arc::new(SystemClock),
            latency_ms: config.mock_latency_ms,
        }
    }

    pub fn with_parts(
        store: Arc<BookingStore>,
        directory: Arc<dyn ProviderDirectory>,
        clock: Arc<dyn Clock>,
        latency_ms: u64,
    ) -> Self {
        Self {
            store,
            directory,
            clock,
            latency_ms,
        }
    }

    pub async fn create(&self, request: BookAppointmentRequest) -> Result<Appointment, AppointmentError> {
        debug!(
            "Booking provider {} on {} {}-{}",
            request.provider_id, request.date, request.start, request.end
        );
        simulate_latency(self.latency_ms).await;

        // Any id the directory does not know, blank ones included, is NotFound.
        let provider = self.directory.find_provider(&request.provider_id).await?
            .ok_or_else(|| {
                warn!("Booking rejected, unknown provider: {:?}", request.provider_id);
                AppointmentError::ProviderNotFound(request.provider_id.clone())
            })?;

        request.validate()?;

        let appointment = Appointment::new(Uuid::new_v4().to_string(), &provider, &request);
        let stored = self.store.insert(appointment).await?;

        info!("Appointment {} booked with {} at {}", stored.id, stored.doctor_name, stored.start_date_time);
        Ok(stored)
    }

    /// Every stored appointment starting after now, earliest first.
    ///
    /// All mock data belongs to one user, so `user_id` does not narrow the
    /// result; a real backend must filter on the owner here.
    pub async fn list_upcoming(&self, user_id: &str) -> Vec<Appointment> {
        debug!("Fetching upcoming appointments for user {}", user_id);
        simulate_latency(self.latency_ms).await;

        self.store.upcoming(self.clock.now()).await
    }

    /// `false` means nothing was removed; callers surface that as a failure.
    pub async fn cancel(&self, appointment_id: &str) -> bool {
        debug!("Cancelling appointment {}", appointment_id);
        simulate_latency(self.latency_ms).await;

        let removed = self.store.remove(appointment_id).await;
        if removed {
            info!("Appointment {} cancelled", appointment_id);
        } else {
            warn!("Cancellation requested for unknown appointment {}", appointment_id);
        }

        removed
    }

    pub async fn get(&self, appointment_id: &str) -> Option<Appointment> {
        simulate_latency(self.latency_ms).await;
        self.store.get(appointment_id).await
    }
}
