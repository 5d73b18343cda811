//! One plan request: validate, prompt, call the model once, extract.

use crate::error::PlanError;
use crate::models::{ClientProfile, GeneratedPlan};
use crate::services::extractor::extract_plan;
use crate::services::prompt::build_prompt;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;
use std::time::{Duration, Instant};
use validator::Validate;

/// Default bound on the model call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Read-only collaborator shared by all requests.
///
/// `provider` is `None` when no model credential is configured; generation
/// then fails with [`PlanError::ConfigurationError`] before any network call.
#[derive(Clone)]
pub struct PlanGenerator {
    provider: Option<Arc<dyn TextProvider>>,
    params: GenerationParams,
    timeout: Duration,
}

impl PlanGenerator {
    pub fn new(
        provider: Option<Arc<dyn TextProvider>>,
        params: GenerationParams,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            params,
            timeout,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Result<&Arc<dyn TextProvider>, PlanError> {
        self.provider.as_ref().ok_or(PlanError::ConfigurationError)
    }

    /// Fail fast when the route cannot serve requests.
    pub fn ensure_configured(&self) -> Result<(), PlanError> {
        self.provider().map(|_| ())
    }

    pub async fn generate(&self, profile: &ClientProfile) -> Result<GeneratedPlan, PlanError> {
        let provider = self.provider()?;
        profile.validate()?;

        let prompt = build_prompt(profile);
        let started = Instant::now();

        let response =
            match tokio::time::timeout(self.timeout, provider.generate(&prompt, &self.params))
                .await
            {
                Ok(Ok(response)) => response,
                Ok(Err(ProviderError::Timeout)) | Err(_) => {
                    return Err(PlanError::UpstreamTimeout(self.timeout));
                }
                Ok(Err(e)) => return Err(PlanError::UpstreamError(e)),
            };

        let text = response
            .text
            .ok_or(PlanError::UpstreamError(ProviderError::EmptyResponse))?;

        let plan = extract_plan(&text).inspect_err(|e| {
            // Raw model output stays in the logs, never in the response
            tracing::warn!(
                outcome = e.outcome(),
                error = %e,
                raw_response = %text,
                "Model response rejected"
            );
        })?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Plan generated"
        );

        Ok(plan)
    }
}
