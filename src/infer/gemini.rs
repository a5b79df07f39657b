//! Gemini API integration.
//!
//! Implements the ScheduleProvider trait for Google's Generative
//! Language API, constraining the response to a JSON event array via
//! a response schema.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::RawScheduleEvent;

use super::{parse_events_text, InferenceError, InferenceRequest, ScheduleProvider};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// Reads API key from GEMINI_API_KEY environment variable.
    pub fn new() -> anyhow::Result<Self> {
        Self::from_key(std::env::var("GEMINI_API_KEY").ok())
    }

    fn from_key(api_key: Option<String>) -> anyhow::Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY not set"))?;

        Ok(Self { client: Client::new(), api_key, model: "gemini-2.5-flash".to_string() })
    }

    /// Create with a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// JSON schema the API is asked to conform to: an array of event
    /// objects matching [`RawScheduleEvent`]'s wire shape.
    fn response_schema() -> serde_json::Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "date": { "type": "STRING", "description": "Format YYYY-MM-DD" },
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "type": { "type": "STRING" },
                    "assignedTo": { "type": "STRING", "description": "Name of the team member assigned" }
                }
            }
        })
    }

    async fn request(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = GeminiRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::response_schema(),
            },
        };

        let url = format!("{API_BASE}/{}:generateContent?key={}", self.model, self.api_key);
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::ApiError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiError(format!("Gemini API error ({status}): {body}")));
        }

        let response: GeminiResponse =
            response.json().await.map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(InferenceError::NoResponse)
    }
}

#[async_trait]
impl ScheduleProvider for GeminiProvider {
    async fn generate(
        &self,
        request: &InferenceRequest,
    ) -> Result<Vec<RawScheduleEvent>, InferenceError> {
        let text = self.request(&request.prompt()).await?;
        parse_events_text(&text)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Gemini API request structure.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Gemini API response structure.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
