use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DoctorVisit, HealthRecordsSummary, LabResult, Prescription};
use crate::services::HealthRecordsService;

fn internal(err: anyhow::Error) -> AppError {
    AppError::Internal(format!("Failed to load health records: {}", err))
}

#[axum::debug_handler]
pub async fn get_summary(
    State(state): State<Arc<AppConfig>>,
    Path(user_id): Path<String>,
) -> Result<Json<HealthRecordsSummary>, AppError> {
    let service = HealthRecordsService::new(&state);

    let summary = service.summary(&user_id).await.map_err(internal)?;

    Ok(Json(summary))
}

#[axum::debug_handler]
pub async fn get_lab_results(
    State(state): State<Arc<AppConfig>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<LabResult>>, AppError> {
    let service = HealthRecordsService::new(&state);

    Ok(Json(service.lab_results(&user_id).await.map_err(internal)?))
}

#[axum::debug_handler]
pub async fn get_prescriptions(
    State(state): State<Arc<AppConfig>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Prescription>>, AppError> {
    let service = HealthRecordsService::new(&state);

    Ok(Json(service.prescriptions(&user_id).await.map_err(internal)?))
}

#[axum::debug_handler]
pub async fn get_doctor_visits(
    State(state): State<Arc<AppConfig>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<DoctorVisit>>, AppError> {
    let service = HealthRecordsService::new(&state);

    Ok(Json(service.doctor_visits(&user_id).await.map_err(internal)?))
}
