use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const LIVENESS_MESSAGE: &str = "O Backend SIPDE está ONLINE e funcionando! 🚀";

/// `GET /`: static liveness text, independent of configuration.
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": crate::SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "model": state.config.models.text_model,
        })),
    )
}

/// Readiness: the generation route can only serve with a model credential.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.generator.is_configured() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "model credential not configured"
            })),
        )
    }
}
