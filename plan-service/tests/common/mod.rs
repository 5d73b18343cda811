#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use plan_service::config::{GoogleConfig, ModelConfig, ObservabilityConfig, PlanConfig};
use plan_service::services::providers::{GenerationParams, HarmBlockThreshold, TextProvider};
use plan_service::services::PlanGenerator;
use plan_service::startup::{build_router, AppState, Application};
use secrecy::Secret;
use service_core::config::Config;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const PLAN_JSON: &str = r#"{"dieta":"Café: ovos e aveia","macros":{"proteina_g":140,"carboidrato_g":"220","gordura_g":60,"fibras_g":"30"},"treino":"ABC 4x por semana"}"#;

pub fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "nome": "Fernanda",
        "idade": 34,
        "sexo": "feminino",
        "objetivo": "ganho de massa",
        "alturaCm": 165,
        "pesoKg": 58,
        "nivel_treino": "iniciante",
        "dias_treino": 3
    })
}

/// Configuration pointing at `api_base`, with or without a credential.
pub fn test_config(api_key: Option<&str>, api_base: &str) -> PlanConfig {
    PlanConfig {
        common: Config::with_port(0),
        models: ModelConfig {
            text_model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            timeout_secs: 5,
            safety_threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
        google: GoogleConfig {
            api_key: api_key.map(|k| Secret::new(k.to_string())),
            api_base: api_base.to_string(),
        },
        observability: ObservabilityConfig {
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        },
    }
}

/// Router with an injected provider and timeout, for in-process requests.
pub fn router_with(provider: Option<Arc<dyn TextProvider>>, timeout: Duration) -> Router {
    let config = test_config(Some("test-key"), "http://127.0.0.1:9");
    let generator = PlanGenerator::new(
        provider,
        GenerationParams::json_output(0.7, HarmBlockThreshold::BlockMediumAndAbove),
        timeout,
    );
    build_router(AppState { config, generator })
}

pub async fn post_plan(app: Router, body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/gerar-plano")
                .header("Content-Type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).expect("Response is not JSON"))
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the real application (Gemini client built from config).
    pub async fn spawn(config: PlanConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    pub async fn spawn_with_provider(provider: Option<Arc<dyn TextProvider>>) -> Self {
        let config = test_config(Some("test-key"), "http://127.0.0.1:9");
        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the liveness endpoint
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        TestApp { address, port }
    }
}
