//! Schedule inference.
//!
//! Turns structured project parameters into a raw event list by
//! calling a generative service. Providers are interchangeable behind
//! the [`ScheduleProvider`] trait; everything they return is untrusted
//! until it passes [`crate::core::CanonicalSchedule::from_raw`].

mod gemini;
mod ollama;

pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;

use async_trait::async_trait;
use serde::Serialize;

use crate::core::{
    DeliverableSpec, InferenceConfig, ProjectContext, RawScheduleEvent, StyleSpec, TeamRoster,
    ValidationError,
};

/// Inference error types.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No response from inference service")]
    NoResponse,
}

/// The structured request sent to an inference provider.
///
/// Every field is copied verbatim from the wizard state except the
/// team list, which is flattened to `"name (role)"` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceRequest {
    pub project_name: String,
    pub project_type: String,
    pub start_date: String,
    pub end_date: String,
    pub team_summary: String,
    pub deliverable_quantity: u32,
    pub file_types: Vec<String>,
    pub content_brief: String,
    pub palette: String,
    pub typography: String,
    pub graphic_elements: String,
}

/// Assignment instruction used when the roster is empty.
const GENERIC_TEAM: &str = "Assign to general Design Team";

impl InferenceRequest {
    /// Assemble a request from the wizard's collected state.
    ///
    /// Project name and both dates are required; everything else may
    /// be blank and is passed through as-is.
    pub fn build(
        context: &ProjectContext,
        roster: &TeamRoster,
        deliverables: &DeliverableSpec,
        style: &StyleSpec,
    ) -> Result<Self, ValidationError> {
        if context.name.trim().is_empty() {
            return Err(ValidationError::MissingField("project name"));
        }
        if context.start_date.trim().is_empty() {
            return Err(ValidationError::MissingField("start date"));
        }
        if context.end_date.trim().is_empty() {
            return Err(ValidationError::MissingField("end date"));
        }

        let team_summary =
            if roster.is_empty() { GENERIC_TEAM.to_string() } else { roster.summary() };

        Ok(Self {
            project_name: context.name.clone(),
            project_type: context.project_type.label().to_string(),
            start_date: context.start_date.clone(),
            end_date: context.end_date.clone(),
            team_summary,
            deliverable_quantity: deliverables.quantity,
            file_types: deliverables.file_types.clone(),
            content_brief: deliverables.content_brief.clone(),
            palette: style.palette.clone(),
            typography: style.typography.clone(),
            graphic_elements: style.graphic_elements.clone(),
        })
    }

    /// Render the request as the schedule-generation prompt.
    pub fn prompt(&self) -> String {
        format!(
            r"Act as a Senior Project Manager for a design studio. Create a detailed project schedule based on these parameters:

PROJECT: {} ({})
DATES: {} to {}
TEAM: {}
DELIVERABLES: {} assets. Formats: {}.
CONTEXT: {}
STYLE: Palette: {}, Typo: {}, Graphics: {}

Generate a logical timeline. For each task, ASSIGN it to the most appropriate team member from the list provided based on their role.
Each task is an object with keys: date (format YYYY-MM-DD), title, description, type, assignedTo (name of the team member assigned).
Return strictly a JSON array.",
            self.project_name,
            self.project_type,
            self.start_date,
            self.end_date,
            self.team_summary,
            self.deliverable_quantity,
            self.file_types.join(", "),
            self.content_brief,
            self.palette,
            self.typography,
            self.graphic_elements,
        )
    }
}

/// Trait for inference providers.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    /// Generate raw schedule events for a request.
    async fn generate(
        &self,
        request: &InferenceRequest,
    ) -> Result<Vec<RawScheduleEvent>, InferenceError>;

    /// Get the provider name.
    fn name(&self) -> &str;

    /// Check if the provider is available.
    async fn is_available(&self) -> bool;
}

/// Parse a provider's text output into raw events.
///
/// Providers are asked for a bare JSON array, but answers drift:
/// markdown code fences and surrounding prose are stripped before
/// parsing. Anything that still is not a JSON array of objects is a
/// malformed response.
pub(crate) fn parse_events_text(text: &str) -> Result<Vec<RawScheduleEvent>, InferenceError> {
    let trimmed = strip_code_fences(text);

    // Fall back to the outermost bracket pair when the model wrapped
    // the array in prose.
    let candidate = match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    };

    serde_json::from_str(candidate).map_err(|e| InferenceError::MalformedResponse(e.to_string()))
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag line, then the closing fence.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim().strip_suffix("```").unwrap_or(body).trim()
}

/// Provider chain with fallback support.
///
/// Tries providers in configured order; a provider that errors is
/// logged and skipped.
pub struct InferenceManager {
    providers: Vec<Box<dyn ScheduleProvider>>,
}

impl InferenceManager {
    /// Create a manager from configuration, keeping only providers
    /// that report themselves available.
    pub async fn from_config(config: &InferenceConfig) -> Self {
        let mut providers: Vec<Box<dyn ScheduleProvider>> = Vec::new();

        for name in &config.providers {
            match name.as_str() {
                "gemini" => {
                    if let Ok(mut gemini) = GeminiProvider::new() {
                        if let Some(model) = &config.model {
                            gemini = gemini.with_model(model.clone());
                        }
                        if gemini.is_available().await {
                            providers.push(Box::new(gemini));
                        }
                    }
                }
                "ollama" => {
                    let ollama = OllamaProvider::new()
                        .with_base_url(config.ollama.base_url.clone())
                        .with_model(config.ollama.model.clone());
                    if ollama.is_available().await {
                        providers.push(Box::new(ollama));
                    }
                }
                other => {
                    tracing::warn!(provider = other, "Unknown inference provider in config");
                }
            }
        }

        Self { providers }
    }

    /// Create with an explicit provider list (used by tests).
    pub fn with_providers(providers: Vec<Box<dyn ScheduleProvider>>) -> Self {
        Self { providers }
    }

    /// Check if any provider is available.
    pub fn is_available(&self) -> bool {
        !self.providers.is_empty()
    }

    /// Get the active provider name.
    pub fn active_provider(&self) -> Option<&str> {
        self.providers.first().map(|p| p.name())
    }

    /// Generate raw schedule events, falling through the chain.
    pub async fn generate(
        &self,
        request: &InferenceRequest,
    ) -> Result<Vec<RawScheduleEvent>, InferenceError> {
        for provider in &self.providers {
            match provider.generate(request).await {
                Ok(events) => return Ok(events),
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "Provider failed, trying next");
                }
            }
        }

        Err(InferenceError::ProviderNotAvailable("No inference provider available".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProjectType;

    fn context() -> ProjectContext {
        ProjectContext {
            name: "Q4 Rebrand".to_string(),
            project_type: ProjectType::BrandingIdentity,
            start_date: "2024-10-01".to_string(),
            end_date: "2024-12-15".to_string(),
        }
    }

    #[test]
    fn test_build_requires_scope_fields() {
        let roster = TeamRoster::new();
        let deliverables = DeliverableSpec::default();
        let style = StyleSpec::default();

        let mut missing_name = context();
        missing_name.name.clear();
        assert!(InferenceRequest::build(&missing_name, &roster, &deliverables, &style).is_err());

        let mut missing_start = context();
        missing_start.start_date = "  ".to_string();
        assert!(InferenceRequest::build(&missing_start, &roster, &deliverables, &style).is_err());

        assert!(InferenceRequest::build(&context(), &roster, &deliverables, &style).is_ok());
    }

    #[test]
    fn test_empty_roster_requests_generic_team() {
        let request = InferenceRequest::build(
            &context(),
            &TeamRoster::new(),
            &DeliverableSpec::default(),
            &StyleSpec::default(),
        )
        .unwrap();
        assert_eq!(request.team_summary, GENERIC_TEAM);
    }

    #[test]
    fn test_team_summary_lists_name_role_pairs() {
        let mut roster = TeamRoster::new();
        roster.add("Jane Doe", "Lead Designer", None).unwrap();

        let request = InferenceRequest::build(
            &context(),
            &roster,
            &DeliverableSpec::default(),
            &StyleSpec::default(),
        )
        .unwrap();
        assert_eq!(request.team_summary, "Jane Doe (Lead Designer)");
        assert!(request.prompt().contains("TEAM: Jane Doe (Lead Designer)"));
    }

    #[test]
    fn test_request_serializes_with_wire_names() {
        let request = InferenceRequest::build(
            &context(),
            &TeamRoster::new(),
            &DeliverableSpec::default(),
            &StyleSpec::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["projectName"], "Q4 Rebrand");
        assert_eq!(json["deliverableQuantity"], 10);
        assert!(json["teamSummary"].is_string());
    }

    #[test]
    fn test_parse_events_text_plain_array() {
        let events = parse_events_text(
            r#"[{"date": "2024-01-10", "title": "Kickoff", "description": "", "type": "Meeting"}]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Kickoff");
    }

    #[test]
    fn test_parse_events_text_strips_code_fences() {
        let fenced = "```json\n[{\"date\": \"2024-01-10\"}]\n```";
        let events = parse_events_text(fenced).unwrap();
        assert_eq!(events[0].date, "2024-01-10");
    }

    #[test]
    fn test_parse_events_text_extracts_array_from_prose() {
        let chatty = "Here is your schedule:\n[{\"date\": \"2024-01-10\"}]\nEnjoy!";
        let events = parse_events_text(chatty).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_parse_events_text_rejects_non_array() {
        assert!(parse_events_text("{\"date\": \"2024-01-10\"}").is_err());
        assert!(parse_events_text("I could not produce a schedule.").is_err());
    }

    #[tokio::test]
    async fn test_empty_manager_reports_unavailable() {
        let manager = InferenceManager::with_providers(Vec::new());
        assert!(!manager.is_available());
        assert!(manager.active_provider().is_none());

        let request = InferenceRequest::build(
            &context(),
            &TeamRoster::new(),
            &DeliverableSpec::default(),
            &StyleSpec::default(),
        )
        .unwrap();
        assert!(matches!(
            manager.generate(&request).await,
            Err(InferenceError::ProviderNotAvailable(_))
        ));
    }
}
