//! Liveness, health, readiness and cross-origin behaviour.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{router_with, TestApp};
use plan_service::handlers::health::LIVENESS_MESSAGE;
use plan_service::services::providers::mock::MockTextProvider;
use plan_service::services::providers::TextProvider;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

#[tokio::test]
async fn liveness_returns_static_text() {
    let app = TestApp::spawn_with_provider(None).await;

    let response = reqwest::get(&app.address)
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), LIVENESS_MESSAGE);
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn_with_provider(None).await;

    let response = reqwest::get(format!("{}/health", app.address))
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "plan-service");
    assert_eq!(body["model"], "gemini-2.5-flash");
}

#[tokio::test]
async fn readiness_reflects_credential() {
    let unconfigured = router_with(None, Duration::from_secs(1));
    let response = unconfigured
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let provider: Arc<dyn TextProvider> = Arc::new(MockTextProvider::with_text("{}"));
    let configured = router_with(Some(provider), Duration::from_secs(1));
    let response = configured
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn preflight_allows_any_origin() {
    let app = router_with(None, Duration::from_secs(1));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/gerar-plano")
                .header(header::ORIGIN, "https://sipde.netlify.app")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_ascii_uppercase();
    for method in ["GET", "PUT", "POST", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing method {}", method);
    }

    let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert!(allowed_headers.contains("authorization"));
}

#[tokio::test]
async fn simple_requests_carry_cors_and_request_id() {
    let app = router_with(None, Duration::from_secs(1));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(response.headers().contains_key("x-request-id"));
}
