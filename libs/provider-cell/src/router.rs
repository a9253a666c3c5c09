use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn provider_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/providers", get(handlers::list_providers))
        .route("/providers/{provider_id}", get(handlers::get_provider))
        .route("/availability", get(handlers::get_available_slots))
        .with_state(state)
}
