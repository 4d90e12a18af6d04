//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router to a stub language model
//! - Helper functions for building uploads and model replies
//!
//! No network access is needed: the stub replaces the Gemini client.

pub mod fixtures;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use notes_core::PromptOptions;
use notes_summarizer_backend::config::Config;
use notes_summarizer_backend::services::llm::{GeminiConfig, LanguageModel, LlmError};
use notes_summarizer_backend::AppState;

pub const STUB_MODEL: &str = "stub-model";

/// Canned behaviour for the stub model.
#[derive(Clone)]
pub enum StubReply {
    Text(String),
    ApiFailure { status: u16, message: String },
}

/// Language model that returns a fixed reply and records prompts.
pub struct StubModel {
    reply: StubReply,
    prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::ApiFailure { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn name(&self) -> &str {
        STUB_MODEL
    }
}

/// Test context containing the stub model and router.
pub struct TestContext {
    pub model: Arc<StubModel>,
    app: Router,
}

impl TestContext {
    /// Create a context whose model answers with `reply`.
    pub fn new(reply: &str) -> Self {
        Self::with_reply(StubReply::Text(reply.to_string()), test_config())
    }

    /// Create a context whose model always fails.
    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_reply(
            StubReply::ApiFailure {
                status,
                message: message.to_string(),
            },
            test_config(),
        )
    }

    pub fn with_reply(reply: StubReply, config: Config) -> Self {
        let model = Arc::new(StubModel::new(reply));
        let state = AppState::new(config, model.clone());
        let app = notes_summarizer_backend::router(state);
        Self { model, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

/// Configuration that never touches the real API.
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        max_upload_bytes: 1024 * 1024,
        prompt: PromptOptions::default(),
        gemini: GeminiConfig {
            api_key: "test-key".to_string(),
            model: STUB_MODEL.to_string(),
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(1),
        },
    }
}
