use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AvailabilityQuery, AvailabilityResponse, ProviderError};
use crate::services::{AvailabilityService, ProviderDirectory, StaticProviderDirectory};

#[axum::debug_handler]
pub async fn list_providers(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let directory = StaticProviderDirectory::new(&state);

    let providers = directory.list_providers().await?;

    Ok(Json(json!({
        "providers": providers,
        "total": providers.len()
    })))
}

#[axum::debug_handler]
pub async fn get_provider(
    State(state): State<Arc<AppConfig>>,
    Path(provider_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let directory = StaticProviderDirectory::new(&state);

    let provider = directory.find_provider(&provider_id).await?;
    let provider = provider.ok_or(ProviderError::NotFound(provider_id))?;

    Ok(Json(json!(provider)))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let availability_service = AvailabilityService::new(&state);

    let slots = availability_service.available_slots(&query.provider_id, query.date).await;

    Ok(Json(AvailabilityResponse {
        provider_id: query.provider_id,
        date: query.date,
        slots,
    }))
}
