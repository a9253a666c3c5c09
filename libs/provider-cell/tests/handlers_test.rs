use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use provider_cell::provider_routes;
use shared_utils::test_utils::TestConfig;

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let app = provider_routes(TestConfig::default().to_arc());

    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_list_providers_endpoint() {
    let (status, json) = get_json("/providers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 3);
    assert_eq!(json["providers"][0]["id"], "1");
    assert_eq!(json["providers"][0]["name"], "Dr. Evelyn Reed");
    assert_eq!(json["providers"][0]["specialty"], "Cardiologist");
}

#[tokio::test]
async fn test_get_provider_endpoint() {
    let (status, json) = get_json("/providers/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["specialty"], "Dermatologist");

    let (status, json) = get_json("/providers/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Provider 42 not found");
}

#[tokio::test]
async fn test_availability_endpoint_late_morning() {
    let (status, json) = get_json("/availability?providerId=1&date=2024-08-09").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["providerId"], "1");
    assert_eq!(json["date"], "2024-08-09");
    assert_eq!(
        json["slots"],
        serde_json::json!([
            {"start": "11:00", "end": "11:30"},
            {"start": "11:30", "end": "12:00"}
        ])
    );
}

#[tokio::test]
async fn test_availability_endpoint_rejects_bad_date() {
    let (status, _) = get_json("/availability?providerId=1&date=08/09/2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json("/availability?date=2024-08-09").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get_json("/doctors").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
