//! Ollama local LLM integration.
//!
//! Implements the ScheduleProvider trait for Ollama as an offline
//! fallback. Unlike Gemini there is no response schema, so the prompt
//! insists on a bare JSON array and the shared parser cleans up the
//! rest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::RawScheduleEvent;

use super::{parse_events_text, InferenceError, InferenceRequest, ScheduleProvider};

/// Ollama API provider for local LLM.
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider with default settings.
    ///
    /// Uses localhost:11434 by default.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("OLLAMA_HOST")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
        }
    }

    /// Create with a specific base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Create with a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn request(&self, prompt: &str) -> Result<String, InferenceError> {
        let request =
            OllamaRequest { model: self.model.clone(), prompt: prompt.to_string(), stream: false };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::ApiError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiError(format!("Ollama API error ({status}): {body}")));
        }

        let response: OllamaResponse =
            response.json().await.map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;
        Ok(response.response)
    }

    fn build_prompt(request: &InferenceRequest) -> String {
        format!(
            "{}\n\nOutput ONLY the JSON array, with no markdown fences and no commentary.",
            request.prompt()
        )
    }
}

impl Default for OllamaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleProvider for OllamaProvider {
    async fn generate(
        &self,
        request: &InferenceRequest,
    ) -> Result<Vec<RawScheduleEvent>, InferenceError> {
        let text = self.request(&Self::build_prompt(request)).await?;
        parse_events_text(&text)
    }

    fn name(&self) -> &str {
        "ollama"
    }

    async fn is_available(&self) -> bool {
        // A quick probe of the version endpoint; Ollama is only
        // usable when the local server is actually running.
        self.client
            .get(format!("{}/api/version", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

/// Ollama API request structure.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Ollama API response structure.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}
