use crate::error::{PlanError, MSG_BODY_TOO_LARGE, MSG_BODY_UNREADABLE, MSG_NO_DATA};
use crate::models::{ClientProfile, GeneratedPlan};
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

/// Decode the request body into a profile.
///
/// Empty bodies, `null` and objects without any known answer all mean no
/// data was sent.
pub fn parse_profile(body: &[u8]) -> Result<ClientProfile, PlanError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(PlanError::InvalidRequest(MSG_NO_DATA.to_string()));
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Request body is not JSON");
        PlanError::InvalidRequest("Corpo da requisição não é um JSON válido.".to_string())
    })?;

    match value {
        Value::Null => Err(PlanError::InvalidRequest(MSG_NO_DATA.to_string())),
        Value::Object(_) => {
            let profile: ClientProfile = serde_json::from_value(value)
                .map_err(|e| PlanError::InvalidRequest(e.to_string()))?;
            if profile.is_empty() {
                Err(PlanError::InvalidRequest(MSG_NO_DATA.to_string()))
            } else {
                Ok(profile)
            }
        }
        _ => Err(PlanError::InvalidRequest(
            "O corpo da requisição deve ser um objeto JSON.".to_string(),
        )),
    }
}

/// Body extraction failures still answer with the JSON error envelope.
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, PlanError> {
    body.map_err(|rejection| {
        tracing::debug!(
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Request body rejected"
        );
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            PlanError::PayloadTooLarge(MSG_BODY_TOO_LARGE.to_string())
        } else {
            PlanError::InvalidRequest(MSG_BODY_UNREADABLE.to_string())
        }
    })
}

async fn handle(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Result<GeneratedPlan, PlanError> {
    // Checked first so a misconfigured deployment never parses or calls out
    state.generator.ensure_configured()?;

    let body = read_body(body)?;
    let profile = parse_profile(&body)?;
    tracing::info!(client = %profile.name, "Received plan request");

    state.generator.generate(&profile).await
}

/// `POST /gerar-plano`
pub async fn generate_plan(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GeneratedPlan>, AppError> {
    match handle(&state, body).await {
        Ok(plan) => Ok(Json(plan)),
        Err(e) => {
            tracing::error!(outcome = e.outcome(), error = %e, "Plan generation failed");
            Err(e.into())
        }
    }
}
