pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

pub use models::{DoctorVisit, HealthRecordsSummary, LabResult, Prescription};
pub use router::records_routes;
pub use services::HealthRecordsService;
