use crate::services::providers::gemini::GEMINI_API_BASE;
use crate::services::providers::HarmBlockThreshold;
use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TEMPERATURE: &str = "0.7";
const DEFAULT_TIMEOUT_SECS: &str = "60";
const DEFAULT_SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model used for plan generation (e.g., gemini-2.5-flash)
    pub text_model: String,
    pub temperature: f32,
    /// Upper bound on a single model call
    pub timeout_secs: u64,
    /// Applied to every harm category
    pub safety_threshold: HarmBlockThreshold,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Absent when `GEMINI_API_KEY` is unset or blank; the generation route
    /// then answers 500 while the rest of the service stays up.
    pub api_key: Option<Secret<String>>,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl PlanConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(PlanConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
                temperature: parse_setting(
                    "GENAI_TEMPERATURE",
                    &get_env("GENAI_TEMPERATURE", DEFAULT_TEMPERATURE),
                )?,
                timeout_secs: parse_setting(
                    "GENAI_TIMEOUT_SECS",
                    &get_env("GENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
                )?,
                safety_threshold: parse_setting(
                    "GENAI_SAFETY_THRESHOLD",
                    &get_env("GENAI_SAFETY_THRESHOLD", DEFAULT_SAFETY_THRESHOLD),
                )?,
            },
            google: GoogleConfig {
                api_key: optional_env("GEMINI_API_KEY").map(Secret::new),
                api_base: get_env("GEMINI_API_BASE", GEMINI_API_BASE),
            },
            observability: ObservabilityConfig {
                log_level: get_env("LOG_LEVEL", "info"),
                otlp_endpoint: optional_env("OTLP_ENDPOINT"),
            },
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.google
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.models.timeout_secs)
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_setting<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_settings() {
        let temperature: f32 = parse_setting("GENAI_TEMPERATURE", " 0.3 ").unwrap();
        assert!((temperature - 0.3).abs() < f32::EPSILON);
        let timeout: u64 = parse_setting("GENAI_TIMEOUT_SECS", "60").unwrap();
        assert_eq!(timeout, 60);
    }

    #[test]
    fn invalid_setting_names_the_variable() {
        let err = parse_setting::<u64>("GENAI_TIMEOUT_SECS", "soon").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("GENAI_TIMEOUT_SECS"));
    }

    #[test]
    fn parses_safety_threshold() {
        let threshold: HarmBlockThreshold =
            parse_setting("GENAI_SAFETY_THRESHOLD", DEFAULT_SAFETY_THRESHOLD).unwrap();
        assert_eq!(threshold, HarmBlockThreshold::BlockMediumAndAbove);
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = PlanConfig {
            common: core_config::Config::with_port(0),
            models: ModelConfig {
                text_model: DEFAULT_TEXT_MODEL.to_string(),
                temperature: 0.7,
                timeout_secs: 60,
                safety_threshold: HarmBlockThreshold::BlockMediumAndAbove,
            },
            google: GoogleConfig {
                api_key: Some(Secret::new(String::new())),
                api_base: GEMINI_API_BASE.to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
        };
        assert!(!config.has_api_key());
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }
}
