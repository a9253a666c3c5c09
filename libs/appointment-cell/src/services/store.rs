// libs/appointment-cell/src/services/store.rs
use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Appointment, AppointmentError};

/// In-memory stand-in for the appointments table.
///
/// The collection is kept ordered by `start_date_time`; appointments that
/// start at the same instant keep insertion order. `insert` and `remove` are
/// the only mutators and every read hands out clones.
#[derive(Debug, Default)]
pub struct BookingStore {
    appointments: RwLock<Vec<Appointment>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.write().await;

        if appointments.iter().any(|a| a.id == appointment.id) {
            return Err(AppointmentError::DuplicateId(appointment.id));
        }

        let position = appointments
            .partition_point(|a| a.start_date_time <= appointment.start_date_time);
        appointments.insert(position, appointment.clone());

        debug!("Stored appointment {} at position {} of {}", appointment.id, position, appointments.len());
        Ok(appointment)
    }

    /// Returns whether a record was removed.
    pub async fn remove(&self, appointment_id: &str) -> bool {
        let mut appointments = self.appointments.write().await;

        match appointments.iter().position(|a| a.id == appointment_id) {
            Some(index) => {
                appointments.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn upcoming(&self, now: NaiveDateTime) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;

        // Sorted by start, so everything past the split point is upcoming.
        let first_upcoming = appointments.partition_point(|a| !a.is_upcoming(now));
        appointments[first_upcoming..].to_vec()
    }

    pub async fn get(&self, appointment_id: &str) -> Option<Appointment> {
        self.appointments
            .read()
            .await
            .iter()
            .find(|a| a.id == appointment_id)
            .cloned()
    }

    pub async fn all(&self) -> Vec<Appointment> {
        self.appointments.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.appointments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.appointments.read().await.is_empty()
    }
}
