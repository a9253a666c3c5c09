// libs/appointment-cell/src/services/workflow.rs
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::{debug, info, warn};

use provider_cell::models::{Provider, TimeSlot};
use shared_utils::format::format_time;
use shared_utils::Clock;

use crate::models::{Appointment, AppointmentError, BookAppointmentRequest};
use crate::services::api::SchedulingApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStep {
    SelectingProvider,
    SelectingDate,
    SelectingSlot,
    Confirmed,
}

/// What the patient is told after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Scheduled {
        appointment_id: String,
        date: NaiveDate,
        start: NaiveTime,
    },
    MissingInformation,
    InvalidSelection(String),
    ProvidersUnavailable,
    SlotsUnavailable,
    AppointmentsUnavailable,
    SchedulingFailed(String),
    Cancelled,
    CancellationFailed,
    CancellationError,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Scheduled { .. } => "Appointment Scheduled!",
            Notice::MissingInformation => "Missing Information",
            Notice::InvalidSelection(_) => "Invalid Selection",
            Notice::SchedulingFailed(_) => "Scheduling Failed",
            Notice::Cancelled => "Appointment Cancelled",
            Notice::CancellationFailed => "Cancellation Failed",
            Notice::ProvidersUnavailable
            | Notice::SlotsUnavailable
            | Notice::AppointmentsUnavailable
            | Notice::CancellationError => "Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Scheduled { appointment_id, date, start } => format!(
                "Your appointment (ID: {}) is confirmed for {} at {}.",
                appointment_id,
                date.format("%B %-d, %Y"),
                format_time(start)
            ),
            Notice::MissingInformation => "Please select a provider, date, and time slot.".to_string(),
            Notice::InvalidSelection(reason) => reason.clone(),
            Notice::ProvidersUnavailable => "Could not load providers. Please try again.".to_string(),
            Notice::SlotsUnavailable => "Could not load available times. Please try again.".to_string(),
            Notice::AppointmentsUnavailable => {
                "Could not load upcoming appointments. Please try again.".to_string()
            }
            Notice::SchedulingFailed(reason) => reason.clone(),
            Notice::Cancelled => "Your appointment has been successfully cancelled.".to_string(),
            Notice::CancellationFailed => {
                "Could not cancel the appointment. Please contact support.".to_string()
            }
            Notice::CancellationError => {
                "An unexpected error occurred during cancellation.".to_string()
            }
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Scheduled { .. } | Notice::Cancelled)
    }

    fn from_booking_error(err: &AppointmentError) -> Self {
        let reason = match err {
            AppointmentError::ProviderNotFound(_) => {
                "The selected provider could not be found. Please choose another provider.".to_string()
            }
            AppointmentError::ValidationError(msg) => msg.clone(),
            AppointmentError::TransientFailure(_) | AppointmentError::DuplicateId(_) => {
                "Could not book the appointment. Please try again.".to_string()
            }
        };
        Notice::SchedulingFailed(reason)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Kept,
    Cancelled,
}

/// Drives one patient's booking attempt and the cancellation dialog.
///
/// Nothing here returns a raw backend error: every failure is logged and
/// turned into a [`Notice`], which is also kept as the latest notice.
pub struct SchedulingWorkflow {
    api: Arc<dyn SchedulingApi>,
    clock: Arc<dyn Clock>,
    user_id: String,
    providers: Vec<Provider>,
    provider_id: Option<String>,
    date: Option<NaiveDate>,
    slots: Vec<TimeSlot>,
    slot: Option<TimeSlot>,
    virtual_visit: bool,
    step: WorkflowStep,
    upcoming: Vec<Appointment>,
    pending_cancel: Option<String>,
    notice: Option<Notice>,
}

impl SchedulingWorkflow {
    pub fn new(api: Arc<dyn SchedulingApi>, clock: Arc<dyn Clock>, user_id: &str) -> Self {
        Self {
            api,
            clock,
            user_id: user_id.to_string(),
            providers: Vec::new(),
            provider_id: None,
            date: None,
            slots: Vec::new(),
            slot: None,
            virtual_visit: false,
            step: WorkflowStep::SelectingProvider,
            upcoming: Vec::new(),
            pending_cancel: None,
            notice: None,
        }
    }

    pub fn step(&self) -> WorkflowStep {
        self.step
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn selected_provider(&self) -> Option<&str> {
        self.provider_id.as_deref()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selected_slot(&self) -> Option<TimeSlot> {
        self.slot
    }

    pub fn upcoming(&self) -> &[Appointment] {
        &self.upcoming
    }

    pub fn pending_cancellation(&self) -> Option<&str> {
        self.pending_cancel.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Page load: providers and upcoming appointments are fetched together
    /// since they touch disjoint state.
    pub async fn load(&mut self) -> Result<(), Notice> {
        debug!("Loading scheduling page for user {}", self.user_id);

        let (providers, upcoming) = futures::join!(
            self.api.list_providers(),
            self.api.list_upcoming(&self.user_id)
        );

        let mut failure = None;

        match providers {
            Ok(providers) => self.providers = providers,
            Err(e) => {
                warn!("Failed to fetch providers: {}", e);
                self.providers.clear();
                failure = Some(Notice::ProvidersUnavailable);
            }
        }

        match upcoming {
            Ok(upcoming) => self.upcoming = upcoming,
            Err(e) => {
                warn!("Failed to fetch upcoming appointments: {}", e);
                failure.get_or_insert(Notice::AppointmentsUnavailable);
            }
        }

        match failure {
            Some(notice) => self.fail(notice),
            None => Ok(()),
        }
    }

    pub async fn select_provider(&mut self, provider_id: &str) -> Result<(), Notice> {
        if !self.providers.iter().any(|p| p.id == provider_id) {
            return self.fail(Notice::InvalidSelection(format!(
                "Provider {} is not available for booking.",
                provider_id
            )));
        }

        debug!("Provider {} selected", provider_id);
        self.provider_id = Some(provider_id.to_string());
        self.notice = None;

        if self.date.is_some() {
            self.refresh_slots().await
        } else {
            self.slot = None;
            self.slots.clear();
            self.step = WorkflowStep::SelectingDate;
            Ok(())
        }
    }

    pub async fn select_date(&mut self, date: NaiveDate) -> Result<(), Notice> {
        if self.provider_id.is_none() {
            return self.fail(Notice::InvalidSelection(
                "Select a provider before choosing a date.".to_string(),
            ));
        }

        if date < self.clock.today() {
            return self.fail(Notice::InvalidSelection(
                "Appointments cannot be scheduled in the past.".to_string(),
            ));
        }

        debug!("Date {} selected", date);
        self.date = Some(date);
        self.notice = None;

        self.refresh_slots().await
    }

    pub fn select_slot(&mut self, slot: TimeSlot) -> Result<(), Notice> {
        if !self.slots.contains(&slot) {
            return self.fail(Notice::InvalidSelection(format!(
                "{} is not an available time.",
                slot.label()
            )));
        }

        self.slot = Some(slot);
        self.step = WorkflowStep::SelectingSlot;
        self.notice = None;
        Ok(())
    }

    pub fn set_virtual(&mut self, virtual_visit: bool) {
        self.virtual_visit = virtual_visit;
    }

    /// Books the selected slot. Missing selections are reported without
    /// calling the backend.
    ///
    /// Once the booking exists it is returned even if a follow-up refresh
    /// fails; the refresh failure then becomes the notice instead of
    /// `Scheduled`.
    pub async fn confirm(&mut self) -> Result<Appointment, Notice> {
        let (Some(provider_id), Some(date), Some(slot)) = (self.provider_id.clone(), self.date, self.slot)
        else {
            return self.fail(Notice::MissingInformation);
        };

        let mut request = BookAppointmentRequest::new(&provider_id, date, slot);
        if self.virtual_visit {
            request = request.virtual_visit();
        }

        let appointment = match self.api.book(request).await {
            Ok(appointment) => appointment,
            Err(e) => {
                warn!("Failed to schedule appointment: {}", e);
                return self.fail(Notice::from_booking_error(&e));
            }
        };

        info!("Appointment {} confirmed for user {}", appointment.id, self.user_id);

        // Availability does not subtract bookings, so the refreshed list
        // still offers the slot that was just taken.
        let slots = self.refresh_slots().await;
        self.step = WorkflowStep::Confirmed;
        let upcoming = self.refresh_upcoming().await;

        self.notice = Some(match slots.and(upcoming) {
            Ok(()) => Notice::Scheduled {
                appointment_id: appointment.id.clone(),
                date,
                start: slot.start,
            },
            Err(notice) => {
                warn!("Appointment {} booked but the page could not be refreshed", appointment.id);
                notice
            }
        });
        Ok(appointment)
    }

    pub async fn refresh_upcoming(&mut self) -> Result<(), Notice> {
        match self.api.list_upcoming(&self.user_id).await {
            Ok(upcoming) => {
                self.upcoming = upcoming;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to refresh upcoming appointments: {}", e);
                self.fail(Notice::AppointmentsUnavailable)
            }
        }
    }

    /// Opens the "are you sure?" gate for one upcoming appointment.
    pub fn request_cancel(&mut self, appointment_id: &str) -> Result<(), Notice> {
        if !self.upcoming.iter().any(|a| a.id == appointment_id) {
            return self.fail(Notice::InvalidSelection(format!(
                "Appointment {} is not in your upcoming appointments.",
                appointment_id
            )));
        }

        self.pending_cancel = Some(appointment_id.to_string());
        self.notice = None;
        Ok(())
    }

    /// Answers the open gate. The gate closes whatever the outcome, so a
    /// failed cancellation can be requested again; nothing is retried here.
    pub async fn respond_cancel(&mut self, confirmed: bool) -> Result<CancelOutcome, Notice> {
        let Some(appointment_id) = self.pending_cancel.take() else {
            return self.fail(Notice::InvalidSelection(
                "No cancellation is awaiting confirmation.".to_string(),
            ));
        };

        if !confirmed {
            debug!("Cancellation of {} dismissed", appointment_id);
            return Ok(CancelOutcome::Kept);
        }

        match self.api.cancel(&appointment_id).await {
            Ok(true) => {
                info!("Appointment {} cancelled by user {}", appointment_id, self.user_id);
                let notice = match self.refresh_upcoming().await {
                    Ok(()) => Notice::Cancelled,
                    Err(notice) => {
                        // The list is stale; at least drop what is known to be gone.
                        self.upcoming.retain(|a| a.id != appointment_id);
                        notice
                    }
                };
                self.notice = Some(notice);
                Ok(CancelOutcome::Cancelled)
            }
            Ok(false) => {
                warn!("Backend did not cancel appointment {}", appointment_id);
                self.fail(Notice::CancellationFailed)
            }
            Err(e) => {
                warn!("Error cancelling appointment {}: {}", appointment_id, e);
                self.fail(Notice::CancellationError)
            }
        }
    }

    async fn refresh_slots(&mut self) -> Result<(), Notice> {
        self.slot = None;

        let (Some(provider_id), Some(date)) = (self.provider_id.clone(), self.date) else {
            self.slots.clear();
            return Ok(());
        };

        self.step = WorkflowStep::SelectingSlot;

        match self.api.available_slots(&provider_id, date).await {
            Ok(slots) => {
                self.slots = slots;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to fetch time slots: {}", e);
                self.slots.clear();
                self.fail(Notice::SlotsUnavailable)
            }
        }
    }

    fn fail<T>(&mut self, notice: Notice) -> Result<T, Notice> {
        self.notice = Some(notice.clone());
        Err(notice)
    }
}
