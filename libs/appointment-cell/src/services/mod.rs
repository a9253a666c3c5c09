pub mod store;
pub mod booking;
pub mod api;
pub mod workflow;

pub use store::BookingStore;
pub use booking::AppointmentBookingService;
pub use api::{LocalSchedulingApi, SchedulingApi};
pub use workflow::{CancelOutcome, Notice, SchedulingWorkflow, WorkflowStep};
