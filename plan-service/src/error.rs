//! Failure taxonomy for plan generation and its HTTP mapping.

use crate::services::providers::ProviderError;
use service_core::error::AppError;
use std::time::Duration;
use thiserror::Error;

pub const MSG_NOT_CONFIGURED: &str = "Configuração do servidor incompleta (API Key faltando).";
pub const MSG_NO_DATA: &str = "Nenhum dado recebido.";
pub const MSG_TIMEOUT: &str = "Falha ao gerar o plano: o modelo não respondeu a tempo.";
pub const MSG_MALFORMED: &str = "Falha ao gerar o plano: resposta do modelo em formato inválido.";
pub const MSG_BODY_TOO_LARGE: &str = "Corpo da requisição excede o tamanho máximo permitido.";
pub const MSG_BODY_UNREADABLE: &str = "Não foi possível ler o corpo da requisição.";

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("model credential is not configured")]
    ConfigurationError,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] validator::ValidationErrors),

    #[error("model call timed out after {0:?}")]
    UpstreamTimeout(Duration),

    #[error("model call failed: {0}")]
    UpstreamError(#[from] ProviderError),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("model response violates plan schema at `{0}`")]
    SchemaViolation(String),
}

impl PlanError {
    /// Terminal state label used in logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            PlanError::ConfigurationError => "not_configured",
            PlanError::InvalidRequest(_)
            | PlanError::PayloadTooLarge(_)
            | PlanError::InvalidProfile(_) => "invalid_request",
            PlanError::UpstreamTimeout(_) => "timed_out",
            PlanError::UpstreamError(ProviderError::NetworkError(_)) => "network_error",
            PlanError::UpstreamError(_) => "upstream_error",
            PlanError::MalformedResponse(_) => "malformed",
            PlanError::SchemaViolation(_) => "schema_violation",
        }
    }
}

fn upstream_message(err: &ProviderError) -> &'static str {
    match err {
        ProviderError::RateLimited => "Falha ao gerar o plano: limite de uso do modelo atingido.",
        ProviderError::ContentFiltered(_) => {
            "Falha ao gerar o plano: resposta bloqueada pelo filtro de segurança."
        }
        ProviderError::Timeout => MSG_TIMEOUT,
        _ => "Falha ao gerar o plano: erro ao contatar o modelo.",
    }
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::ConfigurationError => {
                AppError::ConfigError(anyhow::anyhow!(MSG_NOT_CONFIGURED))
            }
            PlanError::InvalidRequest(msg) => AppError::BadRequest(anyhow::anyhow!(msg)),
            PlanError::PayloadTooLarge(msg) => AppError::PayloadTooLarge(msg),
            PlanError::InvalidProfile(errors) => AppError::ValidationError(errors),
            PlanError::UpstreamTimeout(_) => AppError::UpstreamFailure(MSG_TIMEOUT.to_string()),
            PlanError::UpstreamError(e) => AppError::UpstreamFailure(upstream_message(&e).to_string()),
            PlanError::MalformedResponse(_) => {
                AppError::UpstreamFailure(MSG_MALFORMED.to_string())
            }
            PlanError::SchemaViolation(field) => AppError::UpstreamFailure(format!(
                "Falha ao gerar o plano: resposta do modelo incompleta (campo '{}' ausente ou inválido).",
                field
            )),
        }
    }
}
