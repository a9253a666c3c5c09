// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{
    Appointment, BookAppointmentRequest, CancelAppointmentResponse, UpcomingAppointmentsQuery,
};
use crate::router::AppointmentState;

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppointmentState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = state.booking.create(request).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn get_upcoming_appointments(
    State(state): State<Arc<AppointmentState>>,
    Query(params): Query<UpcomingAppointmentsQuery>,
) -> Result<Json<Value>, AppError> {
    let user_id = params.user_id.unwrap_or_else(|| state.config.mock_user_id.clone());

    let appointments = state.booking.list_upcoming(&user_id).await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len(),
        "userId": user_id
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state.booking.get(&appointment_id).await
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", appointment_id)))?;

    Ok(Json(appointment))
}

/// Unknown ids are not an HTTP error: the body reports `cancelled: false`.
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<CancelAppointmentResponse>, AppError> {
    let cancelled = state.booking.cancel(&appointment_id).await;

    Ok(Json(CancelAppointmentResponse {
        appointment_id,
        cancelled,
    }))
}
