use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::services::BookingStore;
use appointment_cell::{appointment_routes, AppointmentState};
use health_records_cell::records_routes;
use provider_cell::provider_routes;
use shared_config::AppConfig;

pub fn create_router(config: Arc<AppConfig>, store: Arc<BookingStore>) -> Router {
    let appointments = Arc::new(AppointmentState::new(config.clone(), store));

    Router::new()
        .route("/", get(|| async { "Health Portal API is running!" }))
        .merge(provider_routes(config.clone()))
        .merge(appointment_routes(appointments))
        .nest("/records", records_routes(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use shared_utils::test_utils::TestConfig;
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    fn app() -> Router {
        create_router(TestConfig::default().to_arc(), Arc::new(BookingStore::new()))
    }

    #[tokio::test]
    async fn test_root_reports_liveness() {
        let (status, body) = get(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Health Portal API is running!");
    }

    #[tokio::test]
    async fn test_every_cell_is_mounted() {
        for uri in [
            "/providers",
            "/availability?providerId=2&date=2024-08-15",
            "/appointments",
            "/records/user123",
        ] {
            let (status, _) = get(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
        }
    }
}
