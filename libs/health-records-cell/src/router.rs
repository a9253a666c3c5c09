use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

/// Mounted under `/records` by the api binary.
pub fn records_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/{user_id}", get(handlers::get_summary))
        .route("/{user_id}/lab-results", get(handlers::get_lab_results))
        .route("/{user_id}/prescriptions", get(handlers::get_prescriptions))
        .route("/{user_id}/visits", get(handlers::get_doctor_visits))
        .with_state(state)
}
