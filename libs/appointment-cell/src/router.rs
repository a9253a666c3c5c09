// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_config::AppConfig;

use crate::handlers;
use crate::services::{AppointmentBookingService, BookingStore};

/// Shared by every appointment handler; the booking service owns the store
/// handle so bookings survive across requests.
pub struct AppointmentState {
    pub config: Arc<AppConfig>,
    pub booking: AppointmentBookingService,
}

impl AppointmentState {
    pub fn new(config: Arc<AppConfig>, store: Arc<BookingStore>) -> Self {
        let booking = AppointmentBookingService::new(&config, store);
        Self { config, booking }
    }

    pub fn with_booking(config: Arc<AppConfig>, booking: AppointmentBookingService) -> Self {
        Self { config, booking }
    }
}

pub fn appointment_routes(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route(
            "/appointments",
            get(handlers::get_upcoming_appointments).post(handlers::book_appointment),
        )
        .route(
            "/appointments/{appointment_id}",
            get(handlers::get_appointment).delete(handlers::cancel_appointment),
        )
        .with_state(state)
}
